use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::{
    check_grad_near, check_tensor_near, create_test_tensor, create_test_tensor_with_grad,
};

#[test]
fn test_div_tensors_ok() -> Result<(), TensorSlowError> {
    let t1 = create_test_tensor(vec![6.0, 8.0, 9.0], vec![3]);
    let t2 = create_test_tensor(vec![2.0, 4.0, 3.0], vec![3]);
    let result = div_op(&t1, &t2)?;
    check_tensor_near(&result, &[3], &[3.0, 2.0, 3.0], 1e-12);
    Ok(())
}

#[test]
fn test_div_by_zero_is_inf() -> Result<(), TensorSlowError> {
    let t = create_test_tensor(vec![1.0, -1.0], vec![2]);
    let result = div_op(&t, 0.0)?;
    let data = result.data_vec();
    assert!(data[0].is_infinite() && data[0] > 0.0);
    assert!(data[1].is_infinite() && data[1] < 0.0);
    Ok(())
}

#[test]
fn test_div_backward() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![6.0, 3.0], vec![2]);
    let b = create_test_tensor_with_grad(vec![2.0, 4.0], vec![2]);
    div_op(&a, &b)?.backward()?;
    check_grad_near(&a, &[2], &[0.5, 0.25], 1e-12);
    // -a / b²
    check_grad_near(&b, &[2], &[-1.5, -0.1875], 1e-12);
    Ok(())
}

#[test]
fn test_div_grad_check_broadcast() {
    let a = create_test_tensor_with_grad(vec![0.5, -1.5, 2.0, 3.0], vec![2, 2]);
    let b = create_test_tensor_with_grad(vec![1.5, -2.5], vec![2, 1]);
    let result = check_grad(
        |inputs| div_op(&inputs[0], &inputs[1]),
        &[a, b],
        &GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "{:?}", result);
}
