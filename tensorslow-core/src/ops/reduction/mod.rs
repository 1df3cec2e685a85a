// src/ops/reduction/mod.rs
// Reductions over one or more axes.

pub mod sum;
pub(crate) mod utils;

pub use sum::sum_op;
