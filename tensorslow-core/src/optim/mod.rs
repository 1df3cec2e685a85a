// src/optim/mod.rs

//! Optimizers updating parameter tensors from their accumulated gradients.
//!
//! An optimizer owns handles to an ordered list of parameter leaves. A
//! training step is: build the loss graph, `zero_grad(&loss)`, `loss.backward()`,
//! then `step()`, which mutates each parameter's data in place through
//! [`Tensor::update_data`](crate::tensor::Tensor::update_data).

pub mod gd;
pub mod optimizer_trait;
pub mod sgd;

pub use gd::GradientDescent;
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
