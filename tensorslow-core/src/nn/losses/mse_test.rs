use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::{check_grad_near, create_test_tensor, create_test_tensor_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>(), Ok(Reduction::Mean));
    assert_eq!("SUM".parse::<Reduction>(), Ok(Reduction::Sum));
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(TensorSlowError::InvalidOperand { .. })
    ));
    assert_eq!(Reduction::Sum.to_string(), "sum");
}

#[test]
fn test_mse_loss_forward_basic() -> Result<(), TensorSlowError> {
    let mse = MSELoss::new(Reduction::Mean);
    let input = create_test_tensor(vec![1.0, 2.0], vec![2]);
    let target = create_test_tensor(vec![1.5, 1.0], vec![2]);
    let loss = mse.calculate(&input, &target)?;
    assert_eq!(loss.shape(), Vec::<usize>::new());
    assert!(!loss.requires_grad(), "Loss should not require grad if inputs dont");
    assert_relative_eq!(loss.item()?, 0.625, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_forward_sum() -> Result<(), TensorSlowError> {
    let mse: MSELoss = MSELoss::new("sum".parse()?);
    let input = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let target = create_test_tensor(vec![0.0, 2.0, 5.0, 4.0], vec![2, 2]);
    let loss = mse.calculate(&input, &target)?;
    assert_relative_eq!(loss.item()?, 5.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_forward_mismatched_shapes() {
    let input = create_test_tensor(vec![1.0, 2.0], vec![2]);
    let target = create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]);
    let result = mse_loss(&input, &target);
    assert!(matches!(result, Err(TensorSlowError::InvalidOperand { .. })));
}

#[test]
fn test_mse_loss_backward_mean() -> Result<(), TensorSlowError> {
    let input = create_test_tensor_with_grad(vec![1.0, 2.0], vec![2]);
    let target = create_test_tensor(vec![1.5, 1.0], vec![2]);
    let loss = mse_loss(&input, &target)?;
    assert!(loss.requires_grad(), "Loss should require grad if input does");
    loss.backward()?;
    // 2 * (input - target) / n
    check_grad_near(&input, &[2], &[-0.5, 1.0], 1e-12);
    check_grad_near(&target, &[2], &[0.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_backward_target_requires_grad() -> Result<(), TensorSlowError> {
    let input = create_test_tensor(vec![1.0, 2.0], vec![2]);
    let target = create_test_tensor_with_grad(vec![1.5, 1.0], vec![2]);
    MSELoss::new(Reduction::Sum).calculate(&input, &target)?.backward()?;
    check_grad_near(&target, &[2], &[1.0, -2.0], 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_grad_check() {
    let input = create_test_tensor_with_grad(vec![0.3, -1.2, 2.5, 0.0, 1.1, -0.4], vec![2, 3]);
    let target = create_test_tensor_with_grad(vec![1.0, -1.0, 2.0, 0.5, 0.5, 0.5], vec![2, 3]);
    let result = check_grad(
        |inputs| mse_loss(&inputs[0], &inputs[1]),
        &[input, target],
        &GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "{:?}", result);
}
