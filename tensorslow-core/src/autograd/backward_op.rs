use crate::error::TensorSlowError;
use crate::ops::{activation, arithmetic, math_elem, reduction};
use crate::tensor::Tensor;

/// The backward rule of a graph node.
///
/// Every operation that creates a non-leaf `Tensor` installs one of these
/// variants on its output. A variant only carries the immutable parameters its
/// rule needs (exponent, reduced axes); operand values are read from the
/// output's inputs and the output's own data when the rule runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BackwardOp {
    /// No-op rule of leaves (inputs, parameters, constants).
    #[default]
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    /// `a^exponent` with a fixed scalar exponent.
    Pow { exponent: f64 },
    Exp,
    Sigmoid,
    /// Sum over the given (sorted, unique) axes of the input.
    Sum { axes: Vec<usize> },
    Abs,
}

impl BackwardOp {
    /// Diagnostic label of the operation, stored as the node's `op_label`.
    pub fn label(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add => "+".to_string(),
            BackwardOp::Sub => "-".to_string(),
            BackwardOp::Mul => "*".to_string(),
            BackwardOp::Div => "/".to_string(),
            BackwardOp::Pow { exponent } => format!("pow_{}", exponent),
            BackwardOp::Exp => "exp".to_string(),
            BackwardOp::Sigmoid => "sigmoid".to_string(),
            BackwardOp::Sum { .. } => "sum".to_string(),
            BackwardOp::Abs => "abs".to_string(),
        }
    }

    /// Number of operands the rule expects.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Sub | BackwardOp::Mul | BackwardOp::Div => 2,
            _ => 1,
        }
    }

    /// Applies the local chain-rule contribution of `output.grad` to the
    /// gradients of `output`'s operands.
    ///
    /// Contributions are accumulated (`+=`), and only into operands that
    /// require gradients.
    pub(crate) fn apply(&self, output: &Tensor) -> Result<(), TensorSlowError> {
        if let BackwardOp::Leaf = self {
            return Ok(());
        }
        let ctx = GradContext::capture(output);
        if ctx.inputs.len() != self.arity() {
            return Err(TensorSlowError::InternalError(format!(
                "backward rule '{}' expects {} operand(s), node has {}",
                self.label(),
                self.arity(),
                ctx.inputs.len()
            )));
        }
        match self {
            BackwardOp::Leaf => Ok(()),
            BackwardOp::Add => arithmetic::add::add_backward(&ctx),
            BackwardOp::Sub => arithmetic::sub::sub_backward(&ctx),
            BackwardOp::Mul => arithmetic::mul::mul_backward(&ctx),
            BackwardOp::Div => arithmetic::div::div_backward(&ctx),
            BackwardOp::Pow { exponent } => arithmetic::pow::pow_backward(&ctx, *exponent),
            BackwardOp::Exp => math_elem::exp::exp_backward(&ctx),
            BackwardOp::Sigmoid => activation::sigmoid::sigmoid_backward(&ctx),
            BackwardOp::Sum { axes } => reduction::sum::sum_backward(&ctx, axes),
            BackwardOp::Abs => math_elem::abs::abs_backward(&ctx),
        }
    }
}

/// Snapshot of an output node taken right before its backward rule runs.
///
/// Copying the values out means no lock on the output is held while the rule
/// writes into its operands' gradients.
#[derive(Debug)]
pub(crate) struct GradContext {
    pub output_data: Vec<f64>,
    pub output_grad: Vec<f64>,
    pub output_shape: Vec<usize>,
    pub inputs: Vec<Tensor>,
}

impl GradContext {
    fn capture(output: &Tensor) -> Self {
        let guard = output.read_data();
        GradContext {
            output_data: guard.data.clone(),
            output_grad: guard.grad.clone(),
            output_shape: guard.shape.clone(),
            inputs: guard.inputs.clone(),
        }
    }
}
