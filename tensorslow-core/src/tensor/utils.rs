// src/tensor/utils.rs
// Row-major index arithmetic shared by the kernels.

/// Row-major strides of `shape`: `[2, 3, 4]` gives `[12, 4, 1]`.
/// A scalar (empty shape) has no strides.
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut step = 1;
    for &dim in shape.iter().rev() {
        strides.push(step);
        step *= dim;
    }
    strides.reverse();
    strides
}

/// Shape of the result of a binary element-wise operation on `lhs` and `rhs`.
///
/// Shapes are aligned on their trailing dimensions; a missing leading
/// dimension counts as 1. Two aligned sizes are compatible when they match or
/// one of them is 1, and the result takes the larger one.
///
/// The error is a readable reason, wrapped by callers into `InvalidOperand`.
pub fn broadcast_shapes(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>, String> {
    let rank = lhs.len().max(rhs.len());
    let padded = |shape: &[usize], axis: usize| {
        let offset = rank - shape.len();
        if axis < offset {
            1
        } else {
            shape[axis - offset]
        }
    };

    (0..rank)
        .map(|axis| match (padded(lhs, axis), padded(rhs, axis)) {
            (l, r) if l == r || r == 1 => Ok(l),
            (1, r) => Ok(r),
            (l, r) => Err(format!(
                "shapes {:?} and {:?} do not broadcast (axis {}: {} vs {})",
                lhs, rhs, axis, l, r
            )),
        })
        .collect()
}

/// Coordinates of the element at flat position `index`.
///
/// `strides` must be `calculate_strides(shape)`.
pub fn index_to_coord(index: usize, strides: &[usize], shape: &[usize]) -> Vec<usize> {
    let mut remainder = index;
    strides
        .iter()
        .zip(shape)
        .map(|(&stride, &dim)| {
            // Zero-sized dimensions have no valid coordinate to report.
            if stride == 0 || dim == 0 {
                return 0;
            }
            let c = remainder / stride;
            remainder %= stride;
            c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_row_major() {
        assert!(calculate_strides(&[]).is_empty());
        assert_eq!(calculate_strides(&[5]), vec![1]);
        assert_eq!(calculate_strides(&[2, 3, 4]), vec![12, 4, 1]);
    }

    #[test]
    fn test_broadcast_shapes_rules() {
        assert_eq!(broadcast_shapes(&[3, 4], &[4]), Ok(vec![3, 4]));
        assert_eq!(broadcast_shapes(&[3, 1], &[1, 4]), Ok(vec![3, 4]));
        assert_eq!(broadcast_shapes(&[], &[2, 2]), Ok(vec![2, 2]));
        assert_eq!(broadcast_shapes(&[5], &[]), Ok(vec![5]));
        let err = broadcast_shapes(&[2], &[3]).unwrap_err();
        assert!(err.contains("do not broadcast"), "{}", err);
    }

    #[test]
    fn test_index_round_trips_through_coords() {
        let shape = [2, 3];
        let strides = calculate_strides(&shape);
        let coords: Vec<Vec<usize>> = (0..6).map(|i| index_to_coord(i, &strides, &shape)).collect();
        assert_eq!(coords[0], vec![0, 0]);
        assert_eq!(coords[4], vec![1, 1]);
        assert_eq!(coords[5], vec![1, 2]);
        assert_eq!(index_to_coord(0, &[], &[]), Vec::<usize>::new());
    }
}
