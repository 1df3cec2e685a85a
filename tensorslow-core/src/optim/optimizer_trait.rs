use crate::autograd::graph;
use crate::error::TensorSlowError;
use crate::tensor::Tensor;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every parameter that requires gradients,
    /// using the gradient of the last backward pass. Must not run while a
    /// backward pass over the same parameters is in progress.
    fn step(&mut self) -> Result<(), TensorSlowError>;

    /// The parameters managed by the optimizer, in update order.
    fn params(&self) -> &[Tensor];

    /// Clears the gradients of the loss graph rooted at `root` and of every
    /// managed parameter, so the next backward pass starts from zero.
    fn zero_grad(&mut self, root: &Tensor) {
        graph::zero_grad(root);
        for param in self.params().iter().filter(|p| p.requires_grad()) {
            param.clear_grad();
        }
    }
}

/// Checks a learning rate shared by the optimizers' constructors.
pub(crate) fn validate_lr(lr: f64, optimizer: &str) -> Result<(), TensorSlowError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(TensorSlowError::invalid_operand(
            optimizer,
            format!("learning rate must be positive and finite, got {}", lr),
        ))
    }
}
