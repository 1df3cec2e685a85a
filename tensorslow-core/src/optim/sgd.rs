use crate::error::TensorSlowError;
use crate::optim::optimizer_trait::{validate_lr, Optimizer};
use crate::tensor::Tensor;

/// Implements the Stochastic Gradient Descent (SGD) optimizer with classical
/// momentum:
///
/// ```text
/// v = momentum * v + grad
/// p -= lr * v
/// ```
///
/// With `momentum = 0` this is plain gradient descent.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<Tensor>,
    lr: f64,
    momentum: f64,
    // One velocity buffer per parameter, created on the first step.
    momentum_buffers: Vec<Option<Vec<f64>>>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Errors
    /// `InvalidOperand` if `lr` is not positive and finite, or `momentum`
    /// is outside `[0, 1)`.
    pub fn new(
        params: impl IntoIterator<Item = Tensor>,
        lr: f64,
        momentum: f64,
    ) -> Result<Self, TensorSlowError> {
        validate_lr(lr, "SgdOptimizer")?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(TensorSlowError::invalid_operand(
                "SgdOptimizer",
                format!("momentum must be in [0, 1), got {}", momentum),
            ));
        }
        let params: Vec<Tensor> = params.into_iter().collect();
        let momentum_buffers = vec![None; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            momentum_buffers,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), TensorSlowError> {
        let lr = self.lr;
        let momentum = self.momentum;
        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            if !param.requires_grad() {
                continue;
            }
            param.update_data(|data, grad| {
                if momentum == 0.0 {
                    for (value, g) in data.iter_mut().zip(grad) {
                        *value -= lr * g;
                    }
                    return;
                }
                let velocity = buffer.get_or_insert_with(|| vec![0.0; grad.len()]);
                for ((value, v), g) in data.iter_mut().zip(velocity.iter_mut()).zip(grad) {
                    *v = momentum * *v + g;
                    *value -= lr * *v;
                }
            });
        }
        Ok(())
    }

    fn params(&self) -> &[Tensor] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
