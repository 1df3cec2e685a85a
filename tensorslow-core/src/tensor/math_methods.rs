use crate::error::TensorSlowError;
use crate::ops::activation::sigmoid_op;
use crate::ops::arithmetic::{div_op, pow_op};
use crate::ops::math_elem::{abs_op, exp_op};
use crate::ops::reduction::sum_op;
use crate::tensor::Tensor;

impl Tensor {
    /// Raises each element to a scalar power. Delegates to `ops::arithmetic::pow_op`.
    pub fn pow(&self, exponent: f64) -> Result<Tensor, TensorSlowError> {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Result<Tensor, TensorSlowError> {
        exp_op(self)
    }

    pub fn abs(&self) -> Result<Tensor, TensorSlowError> {
        abs_op(self)
    }

    pub fn sigmoid(&self) -> Result<Tensor, TensorSlowError> {
        sigmoid_op(self)
    }

    /// Sums every element into a scalar tensor.
    pub fn sum(&self) -> Result<Tensor, TensorSlowError> {
        sum_op(self, None, false)
    }

    /// Sums over `axes`. Delegates to `ops::reduction::sum_op`.
    pub fn sum_axes(&self, axes: &[usize], keep_dims: bool) -> Result<Tensor, TensorSlowError> {
        sum_op(self, Some(axes), keep_dims)
    }

    /// Mean of all elements, built as `sum / numel` so it is differentiable.
    pub fn mean(&self) -> Result<Tensor, TensorSlowError> {
        let count = self.numel() as f64;
        div_op(self.sum()?, count)
    }
}
