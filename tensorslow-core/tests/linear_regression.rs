use rand::rngs::StdRng;
use rand::SeedableRng;
use tensorslow_core::nn::mse_loss;
use tensorslow_core::optim::{GradientDescent, Optimizer};
use tensorslow_core::tensor::{linspace, normal};
use tensorslow_core::TensorSlowError;

mod common;
use common::{init_logger, scalar_leaf};

#[test]
fn test_fits_noisy_line_with_gradient_descent() -> Result<(), TensorSlowError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let x = linspace(-10.0, 10.0, 50)?;
    let noise = normal(&[50], 0.0, 0.5, &mut rng)?;
    let y = &x * 4.0 + 2.0 + &noise;

    let w = scalar_leaf(0.0);
    let b = scalar_leaf(0.0);
    let mut optimizer = GradientDescent::new([w.clone(), b.clone()], 0.01)?;

    let mut losses = Vec::with_capacity(1000);
    for _ in 0..1000 {
        let prediction = &w * &x + &b;
        let loss = mse_loss(&prediction, &y)?;
        optimizer.zero_grad(&loss);
        loss.backward()?;
        optimizer.step()?;
        losses.push(loss.item()?);
    }

    for pair in losses.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12, "loss went up: {:?}", pair);
    }
    let slope = w.item()?;
    let intercept = b.item()?;
    assert!((slope - 4.0).abs() < 0.05, "slope = {}", slope);
    assert!((intercept - 2.0).abs() < 0.3, "intercept = {}", intercept);
    Ok(())
}

#[test]
fn test_constant_inputs_never_receive_gradients() -> Result<(), TensorSlowError> {
    let x = linspace(0.0, 1.0, 5)?;
    let y = &x * 3.0;
    let w = scalar_leaf(1.0);
    let loss = mse_loss(&(&w * &x), &y)?;
    loss.backward()?;
    assert!(w.grad_vec()[0] < 0.0);
    assert!(x.grad_vec().iter().all(|&g| g == 0.0));
    assert!(y.grad_vec().iter().all(|&g| g == 0.0));
    Ok(())
}
