// src/tensor/traits.rs

use crate::error::TensorSlowError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, sub_op};
use crate::tensor::Tensor;
use num_traits::ToPrimitive;
use std::fmt::{self, Debug};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

// --- Trait Implementations ---

impl Clone for Tensor {
    /// Clones the handle. Both handles refer to the same graph node, so
    /// gradients accumulated through one are visible through the other.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.read_data();
        write!(f, "Tensor(shape={:?}, data={:?}", td.shape, td.data)?;
        if td.requires_grad {
            write!(f, ", grad={:?}", td.grad)?;
        }
        if !td.op_label.is_empty() {
            write!(f, ", op='{}'", td.op_label)?;
        }
        write!(f, ")")
    }
}

impl PartialEq for Tensor {
    /// Value equality: same shape and same data. Gradients and graph
    /// structure are ignored; use [`Tensor::ptr_eq`] for node identity.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        let self_guard = self.read_data();
        let other_guard = other.read_data();
        self_guard.shape == other_guard.shape && self_guard.data == other_guard.data
    }
}

// --- Operand coercion ---

/// Conversion of a value into a graph operand.
///
/// Tensors convert to themselves (the same node). Raw numbers and vectors
/// become new constant leaves that do not require gradients.
pub trait IntoTensor {
    fn into_tensor(self) -> Result<Tensor, TensorSlowError>;
}

impl IntoTensor for Tensor {
    fn into_tensor(self) -> Result<Tensor, TensorSlowError> {
        Ok(self)
    }
}

impl IntoTensor for &Tensor {
    fn into_tensor(self) -> Result<Tensor, TensorSlowError> {
        Ok(self.clone())
    }
}

impl IntoTensor for Vec<f64> {
    fn into_tensor(self) -> Result<Tensor, TensorSlowError> {
        Ok(Tensor::from_vec(self))
    }
}

impl IntoTensor for &[f64] {
    fn into_tensor(self) -> Result<Tensor, TensorSlowError> {
        Ok(Tensor::from_vec(self.to_vec()))
    }
}

macro_rules! impl_into_tensor_for_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoTensor for $t {
                fn into_tensor(self) -> Result<Tensor, TensorSlowError> {
                    let value = self.to_f64().ok_or_else(|| {
                        TensorSlowError::invalid_operand(
                            "operand conversion",
                            format!("{} value is not representable as f64", stringify!($t)),
                        )
                    })?;
                    Ok(Tensor::scalar(value))
                }
            }
        )*
    };
}

impl_into_tensor_for_scalar!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// --- Operator overloads ---

// Operators cannot return a `Result`; the `*_op` functions are the fallible API.
fn unwrap_op(result: Result<Tensor, TensorSlowError>) -> Tensor {
    result.unwrap_or_else(|err| panic!("{}", err))
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        /// # Panics
        /// If the operands cannot be broadcast together.
        impl<R: IntoTensor> $trait<R> for Tensor {
            type Output = Tensor;
            fn $method(self, rhs: R) -> Tensor {
                unwrap_op($op_fn(self, rhs))
            }
        }

        impl<R: IntoTensor> $trait<R> for &Tensor {
            type Output = Tensor;
            fn $method(self, rhs: R) -> Tensor {
                unwrap_op($op_fn(self, rhs))
            }
        }

        impl $trait<Tensor> for f64 {
            type Output = Tensor;
            fn $method(self, rhs: Tensor) -> Tensor {
                unwrap_op($op_fn(self, rhs))
            }
        }

        impl $trait<&Tensor> for f64 {
            type Output = Tensor;
            fn $method(self, rhs: &Tensor) -> Tensor {
                unwrap_op($op_fn(self, rhs))
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl Neg for Tensor {
    type Output = Tensor;
    fn neg(self) -> Tensor {
        unwrap_op(mul_op(self, -1.0))
    }
}

impl Neg for &Tensor {
    type Output = Tensor;
    fn neg(self) -> Tensor {
        unwrap_op(mul_op(self, -1.0))
    }
}
