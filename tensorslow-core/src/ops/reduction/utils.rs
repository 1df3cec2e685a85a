//! Axis handling shared by reductions and by `unreduce`.

use crate::error::TensorSlowError;

/// Normalizes the `axes` argument of a reduction over a tensor of `rank` dimensions.
///
/// `None` selects every axis. Explicit axes are range-checked, sorted and
/// deduplicated; `Some(&[])` selects none, which makes the reduction a copy.
///
/// # Errors
/// `InvalidAxis` for the first axis `>= rank`.
pub(crate) fn process_reduction_axes(
    rank: usize,
    axes: Option<&[usize]>,
) -> Result<Vec<usize>, TensorSlowError> {
    match axes {
        Some(ax) => {
            let mut processed_axes = Vec::with_capacity(ax.len());
            for &axis in ax {
                if axis >= rank {
                    return Err(TensorSlowError::InvalidAxis { axis, rank });
                }
                processed_axes.push(axis);
            }
            processed_axes.sort_unstable();
            processed_axes.dedup();
            Ok(processed_axes)
        }
        None => Ok((0..rank).collect()),
    }
}

/// Shape left after reducing `input_shape` over the (normalized) `axes`.
/// Reduced dimensions are dropped, or kept as size 1 with `keep_dims`.
pub(crate) fn calculate_reduction_output_shape(
    input_shape: &[usize],
    axes: &[usize],
    keep_dims: bool,
) -> Vec<usize> {
    input_shape
        .iter()
        .enumerate()
        .filter_map(|(i, &dim_size)| {
            if !axes.contains(&i) {
                Some(dim_size)
            } else if keep_dims {
                Some(1)
            } else {
                None
            }
        })
        .collect()
}
