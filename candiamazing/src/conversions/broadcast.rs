//! One-dimensional broadcasting of two operands.
//!
//! Follows NumPy's rule restricted to a single axis: operands of equal length
//! are paired elementwise, and an operand of length 1 is repeated against the
//! other. Every other combination is a [`ConversionError::ShapeMismatch`].

use crate::error::{ConversionError, ConversionResult};

/// Length of the broadcast result of operands with lengths `left` and `right`.
pub fn broadcast_len(left: usize, right: usize) -> ConversionResult<usize> {
    match (left, right) {
        (l, r) if l == r => Ok(l),
        (1, r) => Ok(r),
        (l, 1) => Ok(l),
        (l, r) => Err(ConversionError::ShapeMismatch { left: l, right: r }),
    }
}

/// Apply a fallible binary kernel across two broadcast operands.
///
/// Stops at the first element for which `kernel` fails.
pub fn broadcast_with<F>(left: &[f64], right: &[f64], kernel: F) -> ConversionResult<Vec<f64>>
where
    F: Fn(f64, f64) -> ConversionResult<f64>,
{
    let len = broadcast_len(left.len(), right.len())?;
    let pick = |values: &[f64], i: usize| if values.len() == 1 { values[0] } else { values[i] };

    (0..len)
        .map(|i| kernel(pick(left, i), pick(right, i)))
        .collect()
}
