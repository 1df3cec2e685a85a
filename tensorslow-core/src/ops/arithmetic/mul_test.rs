use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::{
    check_grad_near, check_tensor_near, create_test_tensor, create_test_tensor_with_grad,
};

#[test]
fn test_mul_tensors_ok() -> Result<(), TensorSlowError> {
    let t1 = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let t2 = create_test_tensor(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]);
    let result = mul_op(&t1, &t2)?;
    check_tensor_near(&result, &[2, 2], &[5.0, 12.0, 21.0, 32.0], 1e-12);
    Ok(())
}

#[test]
fn test_mul_broadcast_scalar_tensor() -> Result<(), TensorSlowError> {
    let t = create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]);
    let s = Tensor::scalar(2.0);
    let result = mul_op(&t, &s)?;
    check_tensor_near(&result, &[3], &[2.0, 4.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_mul_backward() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![1.0, 2.0, 3.0], vec![3]);
    let b = create_test_tensor_with_grad(vec![4.0, 5.0, 6.0], vec![3]);
    mul_op(&a, &b)?.backward()?;
    check_grad_near(&a, &[3], &[4.0, 5.0, 6.0], 1e-12);
    check_grad_near(&b, &[3], &[1.0, 2.0, 3.0], 1e-12);
    Ok(())
}

#[test]
fn test_mul_backward_same_operand() -> Result<(), TensorSlowError> {
    let x = create_test_tensor_with_grad(vec![3.0, -2.0], vec![2]);
    let y = mul_op(&x, &x)?;
    assert_eq!(y.predecessors().len(), 1);
    y.backward()?;
    check_grad_near(&x, &[2], &[6.0, -4.0], 1e-12);
    Ok(())
}

#[test]
fn test_mul_backward_scalar_broadcast() -> Result<(), TensorSlowError> {
    let a = create_test_tensor_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let s = Tensor::new_with_grad(vec![3.0], vec![])?;
    mul_op(&a, &s)?.backward()?;
    check_grad_near(&a, &[2, 2], &[3.0; 4], 1e-12);
    check_grad_near(&s, &[], &[10.0], 1e-12);
    Ok(())
}

#[test]
fn test_mul_grad_check_broadcast() {
    let a = create_test_tensor_with_grad(vec![0.5, -1.5, 2.0, 3.0, 0.1, -0.7], vec![2, 3]);
    let b = create_test_tensor_with_grad(vec![1.2, -2.0, 0.3], vec![1, 3]);
    let result = check_grad(
        |inputs| mul_op(&inputs[0], &inputs[1]),
        &[a, b],
        &GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "{:?}", result);
}
