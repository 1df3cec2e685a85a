// src/nn/losses/mse.rs

use crate::error::TensorSlowError;
use crate::ops::arithmetic::{div_op, pow_op, sub_op};
use crate::ops::reduction::sum_op;
use crate::tensor::Tensor;
use std::fmt;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = TensorSlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(TensorSlowError::invalid_operand(
                "MSELoss",
                format!("Unsupported reduction type: {}", s),
            )),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => write!(f, "mean"),
            Reduction::Sum => write!(f, "sum"),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between input and target tensors.
///
/// The loss is built from primitive operations, so its gradient comes from
/// the ordinary backward pass:
/// `sum((input - target)^2)`, divided by the element count for `Reduction::Mean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Returns a scalar loss tensor.
    ///
    /// # Errors
    /// `InvalidOperand` if `input` and `target` do not have the same shape.
    pub fn calculate(&self, input: &Tensor, target: &Tensor) -> Result<Tensor, TensorSlowError> {
        if input.shape() != target.shape() {
            return Err(TensorSlowError::invalid_operand(
                "MSELoss",
                format!(
                    "input shape {:?} does not match target shape {:?}",
                    input.shape(),
                    target.shape()
                ),
            ));
        }

        let diff = sub_op(input, target)?;
        let squared_diff = pow_op(&diff, 2.0)?;
        let total = sum_op(&squared_diff, None, false)?;

        match self.reduction {
            Reduction::Mean => div_op(&total, input.numel() as f64),
            Reduction::Sum => Ok(total),
        }
    }
}

/// Mean squared error with mean reduction.
pub fn mse_loss(input: &Tensor, target: &Tensor) -> Result<Tensor, TensorSlowError> {
    MSELoss::default().calculate(input, target)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
