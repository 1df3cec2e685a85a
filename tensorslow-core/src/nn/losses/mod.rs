pub mod mse;

pub use mse::{mse_loss, MSELoss, Reduction};
