//! # tensorslow-core
//!
//! A reverse-mode automatic differentiation engine over `f64` tensors.
//!
//! Operations on [`Tensor`]s build a computation graph as they run. Calling
//! [`Tensor::backward`] on a result walks that graph in reverse topological
//! order and accumulates `d result / d node` into the `grad` of every
//! ancestor that requires gradients.
//!
//! ```
//! use tensorslow_core::Tensor;
//!
//! let a = Tensor::new_with_grad(vec![2.0], vec![]).unwrap();
//! let b = Tensor::new_with_grad(vec![3.0], vec![]).unwrap();
//! let c = &a * &b + &a;
//! c.backward().unwrap();
//! assert_eq!(a.grad_vec(), vec![4.0]);
//! assert_eq!(b.grad_vec(), vec![2.0]);
//! ```

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub use error::TensorSlowError;
pub use tensor::{IntoTensor, Tensor};
// Re-export traits required by public functions
pub use num_traits;
