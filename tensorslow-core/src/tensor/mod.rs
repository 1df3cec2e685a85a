// src/tensor/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::tensor_data::TensorData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod autograd_methods;
mod math_methods;
mod traits;
pub mod create;

// --- Declare utility modules ---
pub mod broadcast_utils;
pub mod utils;

pub use create::{full, linspace, normal, ones, ones_like, rand, randn, uniform, zeros, zeros_like};
pub use traits::IntoTensor;

/// A node of the computation graph: an n-dimensional `f64` array plus its gradient.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node can be the operand of many later nodes,
///     and every clone of a `Tensor` is a cheap handle to the same node.
/// 2.  **Interior Mutability:** `grad` is accumulated by backward rules (and
///     `data` updated by optimizers) through shared references.
///
/// The graph only ever points from a node to the operands it was built from,
/// so reference counting frees a graph once the last handle to its root drops.
pub struct Tensor {
    /// Arc for shared ownership, RwLock for interior mutability of TensorData.
    pub(crate) data: Arc<RwLock<TensorData>>,
}


impl Tensor {
    /// Creates a new leaf tensor from flattened row-major data and a shape.
    ///
    /// The tensor does not require gradients. Use [`Tensor::leaf`] or
    /// [`Tensor::new_with_grad`] for trainable values.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, TensorSlowError> {
        let tensor_data = TensorData::new(data, shape)?;
        Ok(Tensor::from_tensor_data(tensor_data))
    }

    /// Creates a 0-dimensional tensor.
    pub fn scalar(value: f64) -> Self {
        Tensor::from_parts(vec![value], vec![], false)
    }

    /// Creates a 1-dimensional tensor holding `values`.
    pub fn from_vec(values: Vec<f64>) -> Self {
        let len = values.len();
        Tensor::from_parts(values, vec![len], false)
    }

    /// Creates a leaf tensor, the entry point for inputs, parameters and constants.
    pub fn leaf(
        data: Vec<f64>,
        shape: Vec<usize>,
        requires_grad: bool,
    ) -> Result<Self, TensorSlowError> {
        let mut tensor_data = TensorData::new(data, shape)?;
        tensor_data.requires_grad = requires_grad;
        Ok(Tensor::from_tensor_data(tensor_data))
    }

    /// Creates a leaf tensor that requires gradients.
    pub fn new_with_grad(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, TensorSlowError> {
        Tensor::leaf(data, shape, true)
    }

    /// Creates a leaf from any primitive numeric type.
    ///
    /// # Errors
    /// `InvalidOperand` if a value has no `f64` representation or the length
    /// does not match `shape`.
    pub fn from_numeric<N: num_traits::ToPrimitive>(
        values: &[N],
        shape: Vec<usize>,
    ) -> Result<Self, TensorSlowError> {
        let data = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.to_f64().ok_or_else(|| {
                    TensorSlowError::invalid_operand(
                        "tensor creation",
                        format!("element {} is not representable as f64", i),
                    )
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        Tensor::new(data, shape)
    }

    /// Creates a tensor produced by an operation on `inputs`.
    ///
    /// The backward rule is left as a no-op; the producing operation installs
    /// its own with [`Tensor::set_backward`] right after construction.
    pub(crate) fn from_op(
        data: Vec<f64>,
        shape: Vec<usize>,
        inputs: Vec<Tensor>,
        op_label: impl Into<String>,
        requires_grad: bool,
    ) -> Result<Self, TensorSlowError> {
        let mut tensor_data = TensorData::new(data, shape)?;
        tensor_data.inputs = inputs;
        tensor_data.op_label = op_label.into();
        tensor_data.requires_grad = requires_grad;
        Ok(Tensor::from_tensor_data(tensor_data))
    }

    /// Builds a leaf from a buffer already known to match `shape`.
    pub(crate) fn from_parts(data: Vec<f64>, shape: Vec<usize>, requires_grad: bool) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        Tensor::from_tensor_data(TensorData {
            grad: vec![0.0; data.len()],
            data,
            shape,
            requires_grad,
            inputs: Vec::new(),
            backward_op: BackwardOp::Leaf,
            op_label: String::new(),
        })
    }

    fn from_tensor_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Returns a clone of the tensor's shape (`Vec<usize>`).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a copy of the values in row-major order.
    pub fn data_vec(&self) -> Vec<f64> {
        self.read_data().data.clone()
    }

    /// Returns the single value of a one-element tensor.
    pub fn item(&self) -> Result<f64, TensorSlowError> {
        let guard = self.read_data();
        match guard.data.as_slice() {
            [value] => Ok(*value),
            _ => Err(TensorSlowError::invalid_operand(
                "item",
                format!("tensor of shape {:?} is not a single value", guard.shape),
            )),
        }
    }

    /// Name of the operation that produced this tensor (empty for leaves).
    pub fn op_label(&self) -> String {
        self.read_data().op_label.clone()
    }

    /// Identity of the node, stable for the lifetime of the allocation.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Whether two handles refer to the same graph node.
    pub fn ptr_eq(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Acquires a read lock on the tensor's data.
    ///
    /// A poisoned lock is recovered: the data is plain numbers and stays
    /// usable even if a panic happened while it was held.
    pub fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for tensor data was poisoned. Recovering read guard.");
            poisoned.into_inner()
        })
    }

    /// Acquires a write lock on the tensor's data.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for tensor data was poisoned. Recovering write guard.");
            poisoned.into_inner()
        })
    }
}
