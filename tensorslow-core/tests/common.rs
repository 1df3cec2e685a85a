use tensorslow_core::Tensor;

/// Installs `env_logger` once per test binary; set `RUST_LOG=tensorslow_core=debug`
/// to see the engine's logs.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn scalar_leaf(value: f64) -> Tensor {
    Tensor::new_with_grad(vec![value], vec![]).expect("Test scalar creation failed")
}

#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn create_test_tensor_with_grad(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new_with_grad(data, shape).expect("Test tensor creation failed")
}
