// src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_binary_op, propagate_binary};
use crate::tensor::{IntoTensor, Tensor};

/// Performs element-wise multiplication `a * b` with broadcasting.
///
/// Both operands may be the same tensor (`x * x`); the backward pass then
/// accumulates both contributions into it.
pub fn mul_op(a: impl IntoTensor, b: impl IntoTensor) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    let b = b.into_tensor()?;
    apply_binary_op(&a, &b, BackwardOp::Mul, |x, y| x * y)
}

/// d(a*b)/da = b, d(a*b)/db = a.
pub(crate) fn mul_backward(ctx: &GradContext) -> Result<(), TensorSlowError> {
    propagate_binary(ctx, "mul", |a, b| (b, a))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
