use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_unary_op, propagate_unary};
use crate::tensor::{IntoTensor, Tensor};

/// Computes the element-wise exponential \( e^a \).
///
/// Overflow gives `inf`, as `f64::exp` does.
pub fn exp_op(a: impl IntoTensor) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    apply_unary_op(&a, BackwardOp::Exp, f64::exp)
}

/// The derivative of \( e^a \) is its own forward value.
pub(crate) fn exp_backward(ctx: &GradContext) -> Result<(), TensorSlowError> {
    propagate_unary(ctx, "exp", |_, y| y)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
