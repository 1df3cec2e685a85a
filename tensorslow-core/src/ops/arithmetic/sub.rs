// src/ops/arithmetic/sub.rs

use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_binary_op, propagate_binary};
use crate::tensor::{IntoTensor, Tensor};

/// Performs element-wise subtraction `a - b` with broadcasting.
pub fn sub_op(a: impl IntoTensor, b: impl IntoTensor) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    let b = b.into_tensor()?;
    apply_binary_op(&a, &b, BackwardOp::Sub, |x, y| x - y)
}

pub(crate) fn sub_backward(ctx: &GradContext) -> Result<(), TensorSlowError> {
    propagate_binary(ctx, "sub", |_, _| (1.0, -1.0))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
