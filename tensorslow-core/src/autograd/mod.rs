//! # Reverse-mode automatic differentiation
//!
//! - [`backward_op`]: the per-operation backward rules (`BackwardOp`) and their dispatch.
//! - [`graph`]: topological ordering, the backward pass and gradient reset.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{backward, backward_with, topological_sort, zero_grad, NodeId};
