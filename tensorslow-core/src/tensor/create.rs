// src/tensor/create.rs

use crate::error::TensorSlowError;
use crate::tensor::Tensor;
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal, Uniform};

fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Tensor {
    full(shape, 0.0)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Tensor {
    full(shape, 1.0)
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full(shape: &[usize], value: f64) -> Tensor {
    Tensor::from_parts(vec![value; numel(shape)], shape.to_vec(), false)
}

/// Creates a new tensor filled with zeros, having the same shape as the input tensor.
pub fn zeros_like(tensor: &Tensor) -> Tensor {
    zeros(&tensor.shape())
}

/// Creates a new tensor filled with ones, having the same shape as the input tensor.
pub fn ones_like(tensor: &Tensor) -> Tensor {
    ones(&tensor.shape())
}

/// `steps` evenly spaced values from `start` to `end`, both included.
/// One step gives `[start]`, zero steps an empty tensor.
///
/// # Errors
/// `InvalidOperand` if `start` or `end` is not finite.
pub fn linspace(start: f64, end: f64, steps: usize) -> Result<Tensor, TensorSlowError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(TensorSlowError::invalid_operand(
            "linspace",
            format!("bounds must be finite, got {} and {}", start, end),
        ));
    }
    let data_vec: Vec<f64> = match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step_size = (end - start) / (steps - 1) as f64;
            let mut values: Vec<f64> = (0..steps).map(|i| start + i as f64 * step_size).collect();
            // Land exactly on `end` despite rounding.
            values[steps - 1] = end;
            values
        }
    };
    Ok(Tensor::from_parts(data_vec, vec![steps], false))
}

/// Samples from `[0, 1)` with the thread-local generator.
pub fn rand(shape: &[usize]) -> Tensor {
    let mut rng = rand::thread_rng();
    let data_vec: Vec<f64> = (0..numel(shape)).map(|_| rng.gen::<f64>()).collect();
    Tensor::from_parts(data_vec, shape.to_vec(), false)
}

/// Samples from the standard normal distribution with the thread-local generator.
pub fn randn(shape: &[usize]) -> Tensor {
    let mut rng = rand::thread_rng();
    let data_vec: Vec<f64> = (0..numel(shape))
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    Tensor::from_parts(data_vec, shape.to_vec(), false)
}

/// Samples from `[low, high)` using the caller's generator, so seeded runs
/// are reproducible.
pub fn uniform<R: Rng + ?Sized>(
    shape: &[usize],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Tensor, TensorSlowError> {
    if low >= high || low.is_nan() || high.is_nan() {
        return Err(TensorSlowError::invalid_operand(
            "uniform",
            format!("empty range [{}, {})", low, high),
        ));
    }
    let dist = Uniform::new(low, high);
    let data_vec: Vec<f64> = (0..numel(shape)).map(|_| dist.sample(rng)).collect();
    Ok(Tensor::from_parts(data_vec, shape.to_vec(), false))
}

/// Samples from `N(mean, std²)` using the caller's generator.
pub fn normal<R: Rng + ?Sized>(
    shape: &[usize],
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<Tensor, TensorSlowError> {
    let dist = Normal::new(mean, std)
        .map_err(|e| TensorSlowError::invalid_operand("normal", e.to_string()))?;
    let data_vec: Vec<f64> = (0..numel(shape)).map(|_| dist.sample(rng)).collect();
    Ok(Tensor::from_parts(data_vec, shape.to_vec(), false))
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
