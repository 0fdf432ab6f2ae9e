use core::cmp::Ordering;

use crate::*;

/// Arithmetic mean of a slice, `None` when the slice is empty.
/// 
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of a slice, sorting it in place. With an even amount of values the two middle values
/// are averaged. NaNs are ordered after every other value (IEEE total ordering) instead of
/// poisoning the comparison.
/// 
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(total_order);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

#[inline]
fn total_order(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

impl Vector {
    /// Component-wise mean of a set of vectors, `None` when there are none.
    /// 
    pub fn mean_of(vectors: &[Vector]) -> Option<Vector> {
        if vectors.is_empty() {
            return None;
        }
        let mut sum = Vector::zero();
        for v in vectors {
            sum += *v;
        }
        Some(sum / vectors.len() as f64)
    }
}

/// Per-axis median of a set of vectors. Each axis is copied into `scratch` (which must be at
/// least as long as `vectors`) so the input itself is never reordered.
/// 
pub fn median_per_axis(vectors: &[Vector], scratch: &mut [f64]) -> Option<Vector> {
    if vectors.is_empty() || scratch.len() < vectors.len() {
        return None;
    }
    let scratch = &mut scratch[..vectors.len()];
    let mut out = [0.0f64; 3];
    for (axis, value) in out.iter_mut().enumerate() {
        for (slot, v) in scratch.iter_mut().zip(vectors) {
            *slot = v.axis(axis);
        }
        *value = median(scratch)?;
    }
    Some(Vector::from(out))
}
