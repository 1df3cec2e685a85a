use rand::rngs::StdRng;
use rand::SeedableRng;
use tensorslow_core::nn::mse_loss;
use tensorslow_core::optim::{GradientDescent, Optimizer};
use tensorslow_core::tensor::{linspace, normal};
use tensorslow_core::{Tensor, TensorSlowError};

/// Training settings for the noisy line fit.
#[derive(Debug, Clone)]
struct TrainingConfig {
    samples: usize,
    slope: f64,
    intercept: f64,
    noise_std: f64,
    learning_rate: f64,
    steps: usize,
    log_every: usize,
    seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            samples: 50,
            slope: 4.0,
            intercept: 2.0,
            noise_std: 0.5,
            learning_rate: 0.01,
            steps: 1000,
            log_every: 100,
            seed: 42,
        }
    }
}

fn main() -> Result<(), TensorSlowError> {
    env_logger::init();
    let config = TrainingConfig::default();
    log::info!("Training linear model with {:?}", config);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let x = linspace(-10.0, 10.0, config.samples)?;
    let noise = normal(&[config.samples], 0.0, config.noise_std, &mut rng)?;
    let y = &x * config.slope + config.intercept + &noise;

    let w = Tensor::new_with_grad(vec![0.0], vec![])?;
    let b = Tensor::new_with_grad(vec![0.0], vec![])?;
    let mut optimizer = GradientDescent::new([w.clone(), b.clone()], config.learning_rate)?;

    for step in 0..config.steps {
        let prediction = &w * &x + &b;
        let loss = mse_loss(&prediction, &y)?;
        optimizer.zero_grad(&loss);
        loss.backward()?;
        optimizer.step()?;

        if step % config.log_every == 0 || step + 1 == config.steps {
            println!("step {:>4}: loss = {:.6}", step, loss.item()?);
        }
    }

    println!(
        "fitted: y = {:.4} x + {:.4} (true: {} x + {})",
        w.item()?,
        b.item()?,
        config.slope,
        config.intercept
    );
    Ok(())
}
