use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::{apply_unary_op, propagate_unary};
use crate::tensor::{IntoTensor, Tensor};

/// Applies the logistic sigmoid \( \sigma(a) = 1 / (1 + e^{-a}) \) element-wise.
pub fn sigmoid_op(a: impl IntoTensor) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    apply_unary_op(&a, BackwardOp::Sigmoid, sigmoid)
}

/// \( \sigma'(a) = \sigma(a)(1 - \sigma(a)) \), computed from the forward value.
pub(crate) fn sigmoid_backward(ctx: &GradContext) -> Result<(), TensorSlowError> {
    propagate_unary(ctx, "sigmoid", |_, s| s * (1.0 - s))
}

// Two branches so that large |x| never evaluates exp of a large positive number.
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
