use crate::error::TensorSlowError;
use crate::tensor::Tensor;
use approx::relative_eq;
use thiserror::Error;

/// Settings of the finite-difference checker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Accepted difference, both absolute and relative.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Why a gradient check failed. Indices point at the input tensor and the
/// flat element within it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("input {input}, element {element}: backward gave {analytical}, finite differences gave {numerical}")]
    GradientMismatch {
        input: usize,
        element: usize,
        analytical: f64,
        numerical: f64,
    },
    #[error("input {input}, element {element}: finite difference is not finite (f(x+h) = {loss_plus}, f(x-h) = {loss_minus})")]
    NonFiniteNumerical {
        input: usize,
        element: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("input {input}, element {element}: backward produced a non-finite gradient {value}")]
    NonFiniteAnalytical {
        input: usize,
        element: usize,
        value: f64,
    },
    #[error("input {input} requires gradients but is not a leaf")]
    InputNotLeaf { input: usize },
    #[error("output does not require gradients although an input does")]
    OutputDetached,
    #[error(transparent)]
    Tensor(#[from] TensorSlowError),
}

/// Checks analytical gradients against central finite differences.
///
/// The checked scalar is `sum(func(inputs))`: the analytical side runs
/// `backward()` on `func`'s output (which seeds it with ones), the numerical
/// side evaluates `func` on copies of the inputs with one element moved by
/// `±epsilon`. Only inputs that require gradients are checked. Their
/// gradients are reset first and hold the analytical result afterwards.
///
/// # Errors
/// The first element whose gradients differ by more than `tolerance` both in
/// absolute terms and relative to the larger of the two, or any error raised
/// by `func` or the backward pass.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, TensorSlowError>,
{
    let GradCheckConfig { epsilon, tolerance } = *config;

    if let Some(input) = inputs
        .iter()
        .position(|t| t.requires_grad() && !t.is_leaf())
    {
        return Err(GradCheckError::InputNotLeaf { input });
    }

    for input in inputs.iter().filter(|t| t.requires_grad()) {
        input.clear_grad();
    }
    let output = func(inputs)?;
    if !output.requires_grad() && inputs.iter().any(Tensor::requires_grad) {
        return Err(GradCheckError::OutputDetached);
    }
    output.backward()?;

    // Perturbed copies are detached, so evaluating `func` on them never
    // touches the gradients under test.
    let frozen: Vec<Tensor> = inputs.iter().map(Tensor::detach).collect();
    let loss_at = |input: usize, values: Vec<f64>, shape: &[usize]| -> Result<f64, GradCheckError> {
        let mut perturbed = frozen.clone();
        perturbed[input] = Tensor::new(values, shape.to_vec())?;
        Ok(func(&perturbed)?.data_vec().iter().sum())
    };

    for (input, tensor) in inputs.iter().enumerate() {
        if !tensor.requires_grad() {
            continue;
        }
        let analytical_grads = tensor.grad_vec();
        let values = tensor.data_vec();
        let shape = tensor.shape();

        for (element, &analytical) in analytical_grads.iter().enumerate() {
            let mut shifted = values.clone();
            shifted[element] = values[element] + epsilon;
            let loss_plus = loss_at(input, shifted.clone(), &shape)?;
            shifted[element] = values[element] - epsilon;
            let loss_minus = loss_at(input, shifted, &shape)?;
            let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);

            if !numerical.is_finite() {
                return Err(GradCheckError::NonFiniteNumerical {
                    input,
                    element,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical.is_finite() {
                return Err(GradCheckError::NonFiniteAnalytical {
                    input,
                    element,
                    value: analytical,
                });
            }
            if !relative_eq!(analytical, numerical, epsilon = tolerance, max_relative = tolerance) {
                log::debug!(
                    "check_grad: mismatch of {} at input {}, element {}",
                    (analytical - numerical).abs(),
                    input,
                    element
                );
                return Err(GradCheckError::GradientMismatch {
                    input,
                    element,
                    analytical,
                    numerical,
                });
            }
        }
    }

    Ok(())
}
