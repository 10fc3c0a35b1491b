//! Manual partial sums over interleaved partitions.
//!
//! Worker `p` owns indices `{p, p + W, p + 2W, ...}` and accumulates into
//! slot `p` of a shared `[f64; W]`. Adjacent slots share a cache line, so
//! every update from one worker invalidates the line for its neighbours.

use super::DotProduct;
use crate::utils::fork_join::accumulate_scoped;
use crate::utils::partition::StaticPartition;

/// Fixed-stride dot product on exactly `W` scoped threads.
pub struct FixedStride<const W: usize>;

impl<const W: usize> DotProduct for FixedStride<W> {
    #[inline(never)]
    fn dot(&self, a: &[f64], b: &[f64]) -> f64 {
        assert_eq!(a.len(), b.len(), "Vectors must have the same length");

        let partition = StaticPartition::strided(a.len(), W);
        let mut sums = [0.0f64; W];
        accumulate_scoped(&partition, &mut sums, |i| a[i] * b[i]);

        // All workers have joined; combine on this thread
        let mut total = sums[0];
        for partial in &sums[1..] {
            total += partial;
        }
        total
    }
}
