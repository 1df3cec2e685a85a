// src/nn/mod.rs
// Building blocks for training on top of the autograd engine.

pub mod losses;

pub use losses::{mse_loss, MSELoss, Reduction};
