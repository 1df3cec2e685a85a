use rand::rngs::StdRng;
use rand::SeedableRng;
use tensorslow_core::tensor::uniform;
use tensorslow_core::{Tensor, TensorSlowError};

/// Settings of the sigmoid gradient sweep.
#[derive(Debug, Clone)]
struct SweepConfig {
    points: usize,
    low: f64,
    high: f64,
    bias: f64,
    seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            points: 50,
            low: -10.0,
            high: 10.0,
            bias: 1.0,
            seed: 7,
        }
    }
}

fn main() -> Result<(), TensorSlowError> {
    env_logger::init();
    let config = SweepConfig::default();
    log::info!("Running sigmoid sweep with {:?}", config);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let a = uniform(&[config.points], config.low, config.high, &mut rng)?;
    a.requires_grad_(true)?;
    let bias = Tensor::new_with_grad(vec![config.bias], vec![])?;

    // d/da sigmoid(2a + bias) = 2 * s * (1 - s); bias collects the sum over all points.
    let c = (&a * 2.0 + &bias).sigmoid()?;
    c.backward()?;

    let inputs = a.data_vec();
    let grads = a.grad_vec();
    let mut pairs: Vec<(f64, f64)> = inputs.into_iter().zip(grads).collect();
    pairs.sort_by(|l, r| l.0.total_cmp(&r.0));

    println!("{:>10}  {:>12}", "input", "gradient");
    for (input, grad) in &pairs {
        println!("{:>10.4}  {:>12.6e}", input, grad);
    }
    println!("bias grad: {:.6}", bias.grad_vec()[0]);
    Ok(())
}
