use crate::tensor::Tensor;

/// Checks if a tensor matches an expected shape and data within `tolerance`.
/// Panics with the first differing index otherwise.
pub fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    check_values_near(&actual.data_vec(), expected_data, tolerance);
}

/// Same as [`check_tensor_near`] for the accumulated gradient.
pub fn check_grad_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_grad: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    check_values_near(&actual.grad_vec(), expected_grad, tolerance);
}

fn check_values_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Helper to create a tensor for testing purposes.
#[cfg(test)]
pub(crate) fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Failed to create test tensor")
}

/// Helper to create a leaf tensor that requires gradient for testing.
#[cfg(test)]
pub(crate) fn create_test_tensor_with_grad(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new_with_grad(data, shape).expect("Failed to create test tensor with grad")
}
