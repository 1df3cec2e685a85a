// src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_unary_op, propagate_unary};
use crate::tensor::{IntoTensor, Tensor};

/// Raises each element of `a` to a fixed scalar `exponent`.
///
/// The exponent is a plain number, not a graph node, so no gradient flows to it.
pub fn pow_op(a: impl IntoTensor, exponent: f64) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    apply_unary_op(&a, BackwardOp::Pow { exponent }, |x| x.powf(exponent))
}

/// d(aⁿ)/da = n·aⁿ⁻¹.
pub(crate) fn pow_backward(ctx: &GradContext, exponent: f64) -> Result<(), TensorSlowError> {
    propagate_unary(ctx, "pow", |x, _| local_derivative(x, exponent))
}

fn local_derivative(x: f64, exponent: f64) -> f64 {
    // a⁰ is constant; without this, x = 0 gives 0 * 0⁻¹ = NaN.
    if exponent == 0.0 {
        return 0.0;
    }
    exponent * x.powf(exponent - 1.0)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
