// Element-wise math functions.
pub mod abs;
pub mod exp;

pub use abs::abs_op;
pub use exp::exp_op;
