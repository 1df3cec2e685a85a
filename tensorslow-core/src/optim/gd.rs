use crate::error::TensorSlowError;
use crate::optim::optimizer_trait::{validate_lr, Optimizer};
use crate::tensor::Tensor;

/// Plain gradient descent: `p -= lr * grad`.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    params: Vec<Tensor>,
    lr: f64,
}

impl GradientDescent {
    /// # Errors
    /// `InvalidOperand` if `lr` is not positive and finite.
    pub fn new(params: impl IntoIterator<Item = Tensor>, lr: f64) -> Result<Self, TensorSlowError> {
        validate_lr(lr, "GradientDescent")?;
        Ok(GradientDescent {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), TensorSlowError> {
        validate_lr(lr, "GradientDescent")?;
        self.lr = lr;
        Ok(())
    }
}

impl Optimizer for GradientDescent {
    fn step(&mut self) -> Result<(), TensorSlowError> {
        let lr = self.lr;
        for param in self.params.iter().filter(|p| p.requires_grad()) {
            param.update_data(|data, grad| {
                for (value, g) in data.iter_mut().zip(grad) {
                    *value -= lr * g;
                }
            });
        }
        log::trace!("GradientDescent: updated {} parameter(s)", self.params.len());
        Ok(())
    }

    fn params(&self) -> &[Tensor] {
        &self.params
    }
}

#[cfg(test)]
#[path = "gd_test.rs"]
mod tests;
