use thiserror::Error;

/// Custom error type for the TensorSlow autograd engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum TensorSlowError {
    /// A value that cannot serve as a tensor operand: wrong data length for the
    /// requested shape, a non-convertible number, or shapes that do not broadcast.
    #[error("Invalid operand for {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    /// A gradient contribution whose shape differs from the node receiving it.
    ///
    /// This is never caused by user input. It means a backward rule produced a
    /// gradient of the wrong shape, and the backward pass is aborted.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    /// Only produced with the `strict-grad` feature: `backward()` found a
    /// non-zero gradient on its root, so `zero_grad()` was probably skipped.
    #[error("Stale gradient on backward root of shape {shape:?}; call zero_grad() before reusing the graph")]
    StaleGradient { shape: Vec<usize> },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl TensorSlowError {
    pub(crate) fn invalid_operand(operation: &str, reason: impl Into<String>) -> Self {
        TensorSlowError::InvalidOperand {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
