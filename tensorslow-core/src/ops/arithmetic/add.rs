// src/ops/arithmetic/add.rs

use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_binary_op, propagate_binary};
use crate::tensor::{IntoTensor, Tensor};

/// Performs element-wise addition `a + b` with broadcasting.
///
/// Raw numbers and vectors are accepted for either operand and become
/// constant leaves.
///
/// # Errors
/// `InvalidOperand` if an operand cannot be converted or the shapes do not broadcast.
pub fn add_op(a: impl IntoTensor, b: impl IntoTensor) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    let b = b.into_tensor()?;
    apply_binary_op(&a, &b, BackwardOp::Add, |x, y| x + y)
}

/// d(a+b)/da = 1, d(a+b)/db = 1.
pub(crate) fn add_backward(ctx: &GradContext) -> Result<(), TensorSlowError> {
    propagate_binary(ctx, "add", |_, _| (1.0, 1.0))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
