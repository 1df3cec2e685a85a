// src/tensor_data.rs
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::tensor::Tensor;

/// Internal storage and metadata for a Tensor.
///
/// This struct holds the numeric payload, its shape, the accumulated
/// gradient and the autograd links back to the operands that produced it.
/// It is wrapped in `Arc<RwLock<TensorData>>` by the `Tensor` struct
/// to allow shared ownership and interior mutability.
#[derive(Debug)]
pub struct TensorData {
    /// Flattened row-major values.
    pub(crate) data: Vec<f64>,
    /// The shape (dimensions) of the tensor. Empty for scalars.
    /// Fixed at construction.
    pub(crate) shape: Vec<usize>,

    // --- Autograd Metadata ---
    /// Accumulated gradient, same length and shape as `data`. Starts at zero.
    pub(crate) grad: Vec<f64>,
    /// Flag indicating if backward rules may accumulate into `grad`.
    pub(crate) requires_grad: bool,
    /// Operands of the operation that produced this tensor, in call order.
    /// The same tensor may appear twice (e.g. `x * x`).
    /// Leaf tensors have no inputs.
    pub(crate) inputs: Vec<Tensor>,
    /// Backward rule installed by the producing operation.
    pub(crate) backward_op: BackwardOp,
    /// Name of the producing operation, for diagnostics only.
    pub(crate) op_label: String,
}

impl TensorData {
    /// Creates a leaf `TensorData` with a zero-filled gradient.
    ///
    /// # Errors
    /// Returns `TensorSlowError::InvalidOperand` if the length of `data` does not
    /// match the number of elements described by `shape`.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, TensorSlowError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(TensorSlowError::invalid_operand(
                "tensor creation",
                format!(
                    "data length {} does not match shape {:?} ({} elements)",
                    data.len(),
                    shape,
                    numel
                ),
            ));
        }
        Ok(TensorData {
            grad: vec![0.0; numel],
            data,
            shape,
            requires_grad: false,
            inputs: Vec::new(),
            backward_op: BackwardOp::Leaf,
            op_label: String::new(),
        })
    }

    /// Number of elements (1 for scalars).
    pub fn numel(&self) -> usize {
        self.data.len()
    }
}
