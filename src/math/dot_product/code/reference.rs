//! Reference (sequential) dot product.
//!
//! This is the correctness baseline: one accumulator, strictly left to
//! right. The block kernel reuses it row by row.

use super::DotProduct;

/// Compute the dot product of two vectors.
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use par_kernels::math::dot_product::dot_ref;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_ref(&a, &b), 32.0);
/// ```
#[inline(never)]
pub fn dot_ref(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b) {
        sum += x * y;
    }
    sum
}

pub struct Reference;

impl DotProduct for Reference {
    fn dot(&self, a: &[f64], b: &[f64]) -> f64 {
        dot_ref(a, b)
    }
}
