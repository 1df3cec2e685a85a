// src/tensor/autograd_methods.rs

use crate::autograd::{graph, BackwardOp};
use crate::error::TensorSlowError;
use crate::tensor::Tensor;
use std::collections::HashSet;

impl Tensor {
    /// Checks if this tensor requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` status of this tensor **in-place**.
    /// Only allowed on leaf tensors; an operation's output derives the flag
    /// from its operands.
    pub fn requires_grad_(&self, requires_grad: bool) -> Result<(), TensorSlowError> {
        let mut guard = self.write_data();
        if !guard.inputs.is_empty() {
            return Err(TensorSlowError::invalid_operand(
                "requires_grad_",
                format!("'{}' output is not a leaf tensor", guard.op_label),
            ));
        }
        guard.requires_grad = requires_grad;
        Ok(())
    }

    /// Returns `true` if the tensor was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().inputs.is_empty()
    }

    /// Returns the accumulated gradient as a new detached tensor of the same shape.
    pub fn grad(&self) -> Tensor {
        let guard = self.read_data();
        Tensor::from_parts(guard.grad.clone(), guard.shape.clone(), false)
    }

    /// Returns a copy of the accumulated gradient in row-major order.
    pub fn grad_vec(&self) -> Vec<f64> {
        self.read_data().grad.clone()
    }

    /// Distinct nodes this tensor was computed from. An operand used twice
    /// (e.g. in `x * x`) is listed once. Empty for leaves.
    pub fn predecessors(&self) -> Vec<Tensor> {
        let guard = self.read_data();
        let mut seen = HashSet::with_capacity(guard.inputs.len());
        guard
            .inputs
            .iter()
            .filter(|input| seen.insert(input.node_id()))
            .cloned()
            .collect()
    }

    /// Returns the backward rule installed on this node.
    pub fn backward_op(&self) -> BackwardOp {
        self.read_data().backward_op.clone()
    }

    /// Installs the backward rule. Called once by the producing operation,
    /// right after the output node is constructed.
    pub(crate) fn set_backward(&self, op: BackwardOp) {
        self.write_data().backward_op = op;
    }

    /// Adds `grad_to_add` into this tensor's gradient.
    ///
    /// # Errors
    /// `ShapeMismatch` if `grad_shape` (or the buffer length) differs from the
    /// tensor's shape. This indicates a broken backward rule.
    pub(crate) fn accumulate_grad(
        &self,
        grad_to_add: &[f64],
        grad_shape: &[usize],
        operation: &str,
    ) -> Result<(), TensorSlowError> {
        let mut guard = self.write_data();
        if guard.shape != grad_shape || guard.grad.len() != grad_to_add.len() {
            return Err(TensorSlowError::ShapeMismatch {
                expected: guard.shape.clone(),
                actual: grad_shape.to_vec(),
                operation: format!("gradient accumulation ({})", operation),
            });
        }
        guard
            .grad
            .iter_mut()
            .zip(grad_to_add)
            .for_each(|(g, &delta)| *g += delta);
        Ok(())
    }

    /// Resets this tensor's gradient to zero, regardless of `requires_grad`.
    pub fn clear_grad(&self) {
        self.write_data().grad.iter_mut().for_each(|g| *g = 0.0);
    }

    /// Computes the gradients of this tensor w.r.t. every ancestor.
    ///
    /// See [`graph::backward`]. Gradients accumulate across calls; call
    /// [`Tensor::zero_grad`] before reusing a graph.
    pub fn backward(&self) -> Result<(), TensorSlowError> {
        graph::backward(self)
    }

    /// Resets the gradient of this tensor and of every ancestor that requires
    /// gradients. See [`graph::zero_grad`].
    pub fn zero_grad(&self) {
        graph::zero_grad(self)
    }

    /// Creates a new leaf tensor holding a copy of the values, detached
    /// from the computation graph.
    pub fn detach(&self) -> Tensor {
        let guard = self.read_data();
        Tensor::from_parts(guard.data.clone(), guard.shape.clone(), false)
    }

    /// Gives mutable access to the values together with the current gradient.
    ///
    /// This is the parameter update hook for optimizers. It must only be used
    /// between a completed backward pass and the next graph construction.
    /// The shape cannot change.
    pub fn update_data<F>(&self, update: F)
    where
        F: FnOnce(&mut [f64], &[f64]),
    {
        let mut guard = self.write_data();
        let tensor_data = &mut *guard;
        update(&mut tensor_data.data, &tensor_data.grad);
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
