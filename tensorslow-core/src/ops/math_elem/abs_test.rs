use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::ops::arithmetic::mul_op;
use crate::utils::testing::{check_grad_near, check_tensor_near, create_test_tensor_with_grad};

#[test]
fn test_abs_forward() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![-2.5, 0.0, 3.0], vec![3]);
    let result = abs_op(&a)?;
    check_tensor_near(&result, &[3], &[2.5, 0.0, 3.0], 1e-12);
    assert_eq!(result.op_label(), "abs");
    Ok(())
}

#[test]
fn test_abs_backward_sign_with_zero_subgradient() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![-2.5, 0.0, 3.0, -0.0], vec![4]);
    abs_op(&a)?.backward()?;
    check_grad_near(&a, &[4], &[-1.0, 0.0, 1.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_abs_grad_check_away_from_zero() {
    let a = create_test_tensor_with_grad(vec![-2.5, -0.3, 0.4, 1.75, -4.0, 3.0], vec![2, 3]);
    let result = check_grad(
        |inputs| mul_op(abs_op(&inputs[0])?, &inputs[0]),
        &[a],
        &GradCheckConfig::default(),
    );
    assert_eq!(result, Ok(()));
}
