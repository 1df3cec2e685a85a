//! Shape plumbing for gradients: expanding values to a broadcast shape and
//! routing gradients back through broadcasts (`unbroadcast`) and
//! reductions (`unreduce`).
//!
//! All functions work on flat row-major buffers and never touch the graph.

use crate::error::TensorSlowError;
use crate::ops::reduction::sum::sum_kernel;
use crate::ops::reduction::utils::process_reduction_axes;
use crate::tensor::utils::{calculate_strides, index_to_coord};

pub use crate::tensor::utils::broadcast_shapes;

fn shape_mismatch(expected: &[usize], actual: &[usize], operation: &str) -> TensorSlowError {
    TensorSlowError::ShapeMismatch {
        expected: expected.to_vec(),
        actual: actual.to_vec(),
        operation: operation.to_string(),
    }
}

/// Broadcasts `source` (of `source_shape`) to `target_shape`.
///
/// Dimensions are aligned from the right; a source dimension must either equal
/// the target dimension or be 1, in which case its single value is repeated.
pub fn expand_kernel(
    source: &[f64],
    source_shape: &[usize],
    target_shape: &[usize],
) -> Result<Vec<f64>, TensorSlowError> {
    if source_shape == target_shape {
        return Ok(source.to_vec());
    }
    let source_rank = source_shape.len();
    let target_rank = target_shape.len();
    if source_rank > target_rank {
        return Err(shape_mismatch(target_shape, source_shape, "expand"));
    }
    let rank_diff = target_rank - source_rank;
    for (i, &dim) in source_shape.iter().enumerate() {
        if dim != 1 && dim != target_shape[rank_diff + i] {
            return Err(shape_mismatch(target_shape, source_shape, "expand"));
        }
    }

    let source_strides = calculate_strides(source_shape);
    let target_strides = calculate_strides(target_shape);
    let target_numel: usize = target_shape.iter().product();

    let mut expanded = Vec::with_capacity(target_numel);
    for i in 0..target_numel {
        let target_coord = index_to_coord(i, &target_strides, target_shape);
        let offset: usize = source_shape
            .iter()
            .zip(&source_strides)
            .enumerate()
            .map(|(j, (&dim, &stride))| {
                if dim == 1 {
                    0
                } else {
                    target_coord[rank_diff + j] * stride
                }
            })
            .sum();
        expanded.push(source[offset]);
    }
    Ok(expanded)
}

/// Collapses a gradient computed at a broadcast shape back to `target_shape`.
///
/// Leading dimensions absent from `target_shape` are summed away, then every
/// dimension where `target_shape` has size 1 but the gradient is larger is
/// summed with the dimension kept. The result has `target_shape`.
///
/// Example: a `(3, 4)` gradient reduced to `(4,)` gives column sums; reduced
/// to `(1, 4)` it gives the same sums with a leading axis of size 1.
pub fn unbroadcast(
    grad: &[f64],
    grad_shape: &[usize],
    target_shape: &[usize],
) -> Result<Vec<f64>, TensorSlowError> {
    if grad_shape == target_shape {
        return Ok(grad.to_vec());
    }
    let grad_rank = grad_shape.len();
    let target_rank = target_shape.len();
    if grad_rank < target_rank {
        return Err(shape_mismatch(target_shape, grad_shape, "unbroadcast"));
    }

    let rank_diff = grad_rank - target_rank;
    let mut axes_to_reduce: Vec<usize> = (0..rank_diff).collect();
    for (i, &target_dim) in target_shape.iter().enumerate() {
        let grad_dim = grad_shape[rank_diff + i];
        if grad_dim == target_dim {
            continue;
        }
        if target_dim != 1 {
            return Err(shape_mismatch(target_shape, grad_shape, "unbroadcast"));
        }
        axes_to_reduce.push(rank_diff + i);
    }

    // Summing with keep_dims leaves the leading axes as 1s, which have the
    // same row-major layout as `target_shape`.
    let (reduced, _) = sum_kernel(grad, grad_shape, &axes_to_reduce, true);
    Ok(reduced)
}

/// Re-expands a gradient computed after a reduction over `axes` back to `target_shape`.
///
/// `axes` follows the reduction convention: `None` means every axis was reduced.
/// If the forward reduction dropped the reduced axes, size-1 axes are first
/// inserted at each reduced position (ascending); a gradient that kept them
/// is broadcast directly.
///
/// # Errors
/// `InvalidAxis` if an axis is out of range for `target_shape`.
pub fn unreduce(
    grad: &[f64],
    grad_shape: &[usize],
    target_shape: &[usize],
    axes: Option<&[usize]>,
) -> Result<Vec<f64>, TensorSlowError> {
    let target_rank = target_shape.len();
    let axes = process_reduction_axes(target_rank, axes)?;

    let kept_shape = if grad_shape.len() == target_rank {
        grad_shape.to_vec()
    } else if grad_shape.len() + axes.len() == target_rank {
        let mut remaining = grad_shape.iter();
        (0..target_rank)
            .map(|i| {
                if axes.contains(&i) {
                    Ok(1)
                } else {
                    remaining
                        .next()
                        .copied()
                        .ok_or_else(|| shape_mismatch(target_shape, grad_shape, "unreduce"))
                }
            })
            .collect::<Result<Vec<usize>, _>>()?
    } else {
        return Err(shape_mismatch(target_shape, grad_shape, "unreduce"));
    };

    expand_kernel(grad, &kept_shape, target_shape)
}

#[cfg(test)]
#[path = "broadcast_utils_test.rs"]
mod tests;
