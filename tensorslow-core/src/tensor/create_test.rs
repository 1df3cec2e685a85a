use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_zeros() {
    let t = zeros(&[2, 3]);
    assert_eq!(t.shape(), vec![2, 3]);
    assert_eq!(t.numel(), 6);
    assert!(t.data_vec().iter().all(|&x| x == 0.0));
    assert!(!t.requires_grad());
    assert!(t.is_leaf());
}

#[test]
fn test_ones_and_like() {
    let t = ones(&[1, 4]);
    assert!(t.data_vec().iter().all(|&x| x == 1.0));
    let z = zeros_like(&t);
    assert_eq!(z.shape(), vec![1, 4]);
    assert!(z.data_vec().iter().all(|&x| x == 0.0));
    let o = ones_like(&z);
    assert_eq!(o, t);
}

#[test]
fn test_full_scalar_shape() {
    let t = full(&[], -3.5);
    assert_eq!(t.shape(), Vec::<usize>::new());
    assert_eq!(t.item().unwrap(), -3.5);
}

#[test]
fn test_linspace() {
    let t = linspace(-10.0, 10.0, 5).unwrap();
    assert_eq!(t.shape(), vec![5]);
    assert_eq!(t.data_vec(), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);

    let fine = linspace(-10.0, 10.0, 50).unwrap();
    let data = fine.data_vec();
    assert_eq!(data[0], -10.0);
    assert_eq!(data[49], 10.0);
    assert_relative_eq!(data[1] - data[0], 20.0 / 49.0, epsilon = 1e-12);
}

#[test]
fn test_linspace_single_and_zero_steps() {
    let single = linspace(3.0, 7.0, 1).unwrap();
    assert_eq!(single.shape(), vec![1]);
    assert_eq!(single.data_vec(), vec![3.0]);

    let empty = linspace(0.0, 1.0, 0).unwrap();
    assert_eq!(empty.shape(), vec![0]);
    assert!(empty.data_vec().is_empty());
}

#[test]
fn test_linspace_non_finite_bounds() {
    assert!(matches!(
        linspace(0.0, f64::INFINITY, 3),
        Err(TensorSlowError::InvalidOperand { .. })
    ));
}

#[test]
fn test_rand() {
    let t = rand(&[2, 2]);
    assert_eq!(t.shape(), vec![2, 2]);
    assert!(t.data_vec().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn test_randn() {
    let t = randn(&[3, 3]);
    assert_eq!(t.numel(), 9);
    assert!(t.data_vec().iter().all(|x| x.is_finite()));
}

#[test]
fn test_uniform_is_seeded_and_in_range() {
    let a = uniform(&[100], -2.0, 3.0, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = uniform(&[100], -2.0, 3.0, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert!(a.data_vec().iter().all(|&x| (-2.0..3.0).contains(&x)));
    assert!(uniform(&[2], 1.0, 1.0, &mut StdRng::seed_from_u64(7)).is_err());
    assert!(uniform(&[2], 2.0, 1.0, &mut StdRng::seed_from_u64(7)).is_err());
    assert!(uniform(&[2], f64::NAN, 1.0, &mut StdRng::seed_from_u64(7)).is_err());
}

#[test]
fn test_normal_statistics() {
    let mut rng = StdRng::seed_from_u64(42);
    let t = normal(&[10_000], 1.0, 0.5, &mut rng).unwrap();
    let data = t.data_vec();
    let mean = data.iter().sum::<f64>() / data.len() as f64;
    let var = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    assert_relative_eq!(mean, 1.0, epsilon = 0.05);
    assert_relative_eq!(var.sqrt(), 0.5, epsilon = 0.05);
}

#[test]
fn test_normal_negative_std() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        normal(&[2], 0.0, -1.0, &mut rng),
        Err(TensorSlowError::InvalidOperand { .. })
    ));
}
