// src/ops/arithmetic/div.rs

use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_binary_op, propagate_binary};
use crate::tensor::{IntoTensor, Tensor};

/// Performs element-wise division `a / b` with broadcasting.
///
/// Division by zero follows IEEE 754 (`inf` or `NaN`); it is not an error.
pub fn div_op(a: impl IntoTensor, b: impl IntoTensor) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    let b = b.into_tensor()?;
    apply_binary_op(&a, &b, BackwardOp::Div, |x, y| x / y)
}

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b².
pub(crate) fn div_backward(ctx: &GradContext) -> Result<(), TensorSlowError> {
    propagate_binary(ctx, "div", |a, b| (1.0 / b, -a / (b * b)))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
