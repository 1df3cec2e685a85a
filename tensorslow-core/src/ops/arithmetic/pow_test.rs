use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::{check_grad_near, check_tensor_near, create_test_tensor_with_grad};

#[test]
fn test_pow_forward() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![-2.0, 0.0, 3.0], vec![3]);
    let result = pow_op(&a, 2.0)?;
    check_tensor_near(&result, &[3], &[4.0, 0.0, 9.0], 1e-12);
    assert_eq!(result.op_label(), "pow_2");
    Ok(())
}

#[test]
fn test_pow_backward_square() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![-2.0, 0.0, 3.0], vec![3]);
    pow_op(&a, 2.0)?.backward()?;
    check_grad_near(&a, &[3], &[-4.0, 0.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_pow_zero_exponent_has_zero_gradient() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![0.0, 2.0], vec![2]);
    let result = pow_op(&a, 0.0)?;
    check_tensor_near(&result, &[2], &[1.0, 1.0], 1e-12);
    result.backward()?;
    check_grad_near(&a, &[2], &[0.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_pow_grad_check_fractional() {
    let a = create_test_tensor_with_grad(vec![0.5, 1.5, 2.0, 4.0], vec![2, 2]);
    let result = check_grad(
        |inputs| pow_op(&inputs[0], 1.5),
        &[a],
        &GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "{:?}", result);
}
