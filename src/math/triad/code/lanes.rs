//! Triad over fixed-width lane groups.
//!
//! Processing `LANES` elements per step with bounds known up front lets the
//! compiler emit vector instructions without any intrinsics.

use super::Triad;

const LANES: usize = 4;

pub struct Lanes;

impl Triad for Lanes {
    #[inline(never)]
    fn triad(&self, a: &mut [f64], b: &[f64], scalar: f64, c: &[f64]) {
        assert!(a.len() == b.len() && b.len() == c.len(), "Vectors must have the same length");

        let mut a_chunks = a.chunks_exact_mut(LANES);
        let mut b_chunks = b.chunks_exact(LANES);
        let mut c_chunks = c.chunks_exact(LANES);

        for ((a4, b4), c4) in (&mut a_chunks).zip(&mut b_chunks).zip(&mut c_chunks) {
            for lane in 0..LANES {
                a4[lane] = b4[lane] + scalar * c4[lane];
            }
        }

        // Handle remaining elements
        let tail = a_chunks.into_remainder();
        for ((x, y), z) in tail.iter_mut().zip(b_chunks.remainder()).zip(c_chunks.remainder()) {
            *x = y + scalar * z;
        }
    }
}
