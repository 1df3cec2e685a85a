use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::ops::build_node;
use crate::ops::reduction::utils::{calculate_reduction_output_shape, process_reduction_axes};
use crate::tensor::broadcast_utils::unreduce;
use crate::tensor::utils::{calculate_strides, index_to_coord};
use crate::tensor::{IntoTensor, Tensor};

/// Sums `data` (of `shape`) over `axes`.
///
/// `axes` must already be processed (sorted, unique, in range). An empty
/// `axes` slice is a no-op sum and returns a copy of the input.
///
/// Returns the summed values together with their shape.
pub(crate) fn sum_kernel(
    data: &[f64],
    shape: &[usize],
    axes: &[usize],
    keep_dims: bool,
) -> (Vec<f64>, Vec<usize>) {
    let output_shape = calculate_reduction_output_shape(shape, axes, keep_dims);
    let output_numel: usize = output_shape.iter().product();
    let mut result = vec![0.0; output_numel];

    // Strides of the output seen from the input's coordinates: reduced axes
    // contribute nothing to the output offset.
    let kept_shape = calculate_reduction_output_shape(shape, axes, true);
    let kept_strides = calculate_strides(&kept_shape);
    let input_strides = calculate_strides(shape);

    for (i, &value) in data.iter().enumerate() {
        let coord = index_to_coord(i, &input_strides, shape);
        let offset: usize = coord
            .iter()
            .enumerate()
            .filter(|(dim, _)| !axes.contains(dim))
            .map(|(dim, &c)| c * kept_strides[dim])
            .sum();
        result[offset] += value;
    }
    (result, output_shape)
}

/// Sums the elements of `a` over `axes`.
///
/// `None` reduces every axis and gives a scalar, or an all-ones shape with
/// `keep_dims`. An empty slice reduces nothing: the output is a copy of `a`.
///
/// # Errors
/// `InvalidAxis` if an axis is out of range.
pub fn sum_op(
    a: impl IntoTensor,
    axes: Option<&[usize]>,
    keep_dims: bool,
) -> Result<Tensor, TensorSlowError> {
    let a = a.into_tensor()?;
    let (result_data, output_shape, processed_axes) = {
        let guard = a.read_data();
        let processed_axes = process_reduction_axes(guard.shape.len(), axes)?;
        let (data, shape) = sum_kernel(&guard.data, &guard.shape, &processed_axes, keep_dims);
        (data, shape, processed_axes)
    };
    build_node(
        result_data,
        output_shape,
        vec![a],
        BackwardOp::Sum {
            axes: processed_axes,
        },
    )
}

/// Each input element contributed once to its output cell, so its gradient
/// is the output gradient re-expanded over the reduced axes.
pub(crate) fn sum_backward(ctx: &GradContext, axes: &[usize]) -> Result<(), TensorSlowError> {
    let input = &ctx.inputs[0];
    if !input.requires_grad() {
        return Ok(());
    }
    let input_shape = input.shape();
    let grad = unreduce(&ctx.output_grad, &ctx.output_shape, &input_shape, Some(axes))?;
    input.accumulate_grad(&grad, &input_shape, "sum")
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
