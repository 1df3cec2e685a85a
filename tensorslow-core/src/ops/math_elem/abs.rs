use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_unary_op, propagate_unary};
use crate::tensor::{IntoTensor, Tensor};

/// Computes the element-wise absolute value.
pub fn abs_op(a: impl IntoTensor) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    apply_unary_op(&a, BackwardOp::Abs, f64::abs)
}

/// d|a|/da = sign(a), with 0 as the sub-gradient at a = 0.
pub(crate) fn abs_backward(ctx: &GradContext) -> Result<(), TensorSlowError> {
    propagate_unary(ctx, "abs", |x, _| sign(x))
}

// f64::signum returns 1.0 for +0.0.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "abs_test.rs"]
mod tests;
