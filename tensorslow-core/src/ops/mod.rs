//! # Tensor Operations Module (`ops`)
//!
//! Every differentiable operation of the engine lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `sum_op`, ...) that computes the forward values and builds the output
//!   node. `Tensor` methods and operator overloads call these.
//! - **`_backward` Functions:** the matching chain rule, dispatched by
//!   [`BackwardOp::apply`](crate::autograd::BackwardOp) during the backward pass.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div (with broadcasting) and pow.
//! - [`math_elem`]: element-wise math functions (exp, abs).
//! - [`activation`]: sigmoid.
//! - [`reduction`]: sum over axes.

use crate::autograd::backward_op::GradContext;
use crate::autograd::BackwardOp;
use crate::error::TensorSlowError;
use crate::tensor::broadcast_utils::{broadcast_shapes, expand_kernel, unbroadcast};
use crate::tensor::Tensor;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

/// Creates the output node of an operation.
///
/// The output requires gradients if any operand does. Operands are always
/// recorded as inputs, so the graph structure does not depend on the flag.
pub(crate) fn build_node(
    data: Vec<f64>,
    shape: Vec<usize>,
    inputs: Vec<Tensor>,
    op: BackwardOp,
) -> Result<Tensor, TensorSlowError> {
    let requires_grad = inputs.iter().any(Tensor::requires_grad);
    let output = Tensor::from_op(data, shape, inputs, op.label(), requires_grad)?;
    output.set_backward(op);
    Ok(output)
}

/// Applies a binary element-wise operation with broadcasting.
///
/// # Errors
/// `InvalidOperand` if the shapes of `a` and `b` do not broadcast.
pub(crate) fn apply_binary_op<F>(
    a: &Tensor,
    b: &Tensor,
    op: BackwardOp,
    f: F,
) -> Result<Tensor, TensorSlowError>
where
    F: Fn(f64, f64) -> f64,
{
    let a_shape = a.shape();
    let b_shape = b.shape();
    let output_shape = broadcast_shapes(&a_shape, &b_shape)
        .map_err(|reason| TensorSlowError::invalid_operand(&op.label(), reason))?;

    let a_values = expand_kernel(&a.read_data().data, &a_shape, &output_shape)?;
    let b_values = expand_kernel(&b.read_data().data, &b_shape, &output_shape)?;
    let result_data = a_values
        .iter()
        .zip(&b_values)
        .map(|(&x, &y)| f(x, y))
        .collect();

    build_node(result_data, output_shape, vec![a.clone(), b.clone()], op)
}

/// Applies a unary element-wise operation.
pub(crate) fn apply_unary_op<F>(a: &Tensor, op: BackwardOp, f: F) -> Result<Tensor, TensorSlowError>
where
    F: Fn(f64) -> f64,
{
    let (result_data, shape) = {
        let guard = a.read_data();
        let data: Vec<f64> = guard.data.iter().map(|&x| f(x)).collect();
        (data, guard.shape.clone())
    };
    build_node(result_data, shape, vec![a.clone()], op)
}

/// Chain rule of a broadcasting binary operation.
///
/// `local` maps the (broadcast) operand values `(a, b)` to the local
/// derivatives `(d out / d a, d out / d b)`. Each contribution is scaled by the
/// output gradient, reduced back to its operand's shape and accumulated.
pub(crate) fn propagate_binary<F>(
    ctx: &GradContext,
    operation: &str,
    local: F,
) -> Result<(), TensorSlowError>
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let a = &ctx.inputs[0];
    let b = &ctx.inputs[1];
    if !a.requires_grad() && !b.requires_grad() {
        return Ok(());
    }
    let a_shape = a.shape();
    let b_shape = b.shape();
    let a_values = expand_kernel(&a.read_data().data, &a_shape, &ctx.output_shape)?;
    let b_values = expand_kernel(&b.read_data().data, &b_shape, &ctx.output_shape)?;

    let numel = ctx.output_grad.len();
    let mut grad_a = Vec::with_capacity(numel);
    let mut grad_b = Vec::with_capacity(numel);
    for ((&x, &y), &upstream) in a_values.iter().zip(&b_values).zip(&ctx.output_grad) {
        let (da, db) = local(x, y);
        grad_a.push(upstream * da);
        grad_b.push(upstream * db);
    }

    if a.requires_grad() {
        let reduced = unbroadcast(&grad_a, &ctx.output_shape, &a_shape)?;
        a.accumulate_grad(&reduced, &a_shape, operation)?;
    }
    if b.requires_grad() {
        let reduced = unbroadcast(&grad_b, &ctx.output_shape, &b_shape)?;
        b.accumulate_grad(&reduced, &b_shape, operation)?;
    }
    Ok(())
}

/// Chain rule of a unary element-wise operation.
///
/// `local` maps `(input, output)` values to `d out / d input`.
pub(crate) fn propagate_unary<F>(
    ctx: &GradContext,
    operation: &str,
    local: F,
) -> Result<(), TensorSlowError>
where
    F: Fn(f64, f64) -> f64,
{
    let input = &ctx.inputs[0];
    if !input.requires_grad() {
        return Ok(());
    }
    let input_data = input.data_vec();
    let grad: Vec<f64> = input_data
        .iter()
        .zip(&ctx.output_data)
        .zip(&ctx.output_grad)
        .map(|((&x, &y), &upstream)| upstream * local(x, y))
        .collect();
    input.accumulate_grad(&grad, &ctx.output_shape, operation)
}
