//! Manual partial sums over contiguous blocks handed out by the pool.
//!
//! Same shared `[f64; W]` slot array and combine step as the fixed-stride
//! variant; only the split differs: each worker gets one contiguous block
//! and the pool schedules the blocks.
//!
//! The block bounds come from [`StaticPartition::contiguous`], not from
//! rayon. A rayon-split range gives no stable chunk-to-slot mapping, and the
//! slot array needs exactly one writer per slot. rayon only dispatches the
//! `W` blocks onto its threads.

use super::DotProduct;
use crate::utils::fork_join::accumulate_pooled;
use crate::utils::partition::StaticPartition;
use rayon::ThreadPool;
use std::sync::Arc;

/// Work-shared dot product on a pool of exactly `W` threads.
pub struct WorkShared<const W: usize> {
    pool: Arc<ThreadPool>,
}

impl<const W: usize> WorkShared<W> {
    /// # Panics
    /// Panics if `pool` does not have exactly `W` threads.
    pub fn new(pool: Arc<ThreadPool>) -> Self {
        assert_eq!(pool.current_num_threads(), W, "pool size must match worker count");
        Self { pool }
    }
}

impl<const W: usize> DotProduct for WorkShared<W> {
    #[inline(never)]
    fn dot(&self, a: &[f64], b: &[f64]) -> f64 {
        assert_eq!(a.len(), b.len(), "Vectors must have the same length");

        let partition = StaticPartition::contiguous(a.len(), W);
        let mut sums = [0.0f64; W];
        accumulate_pooled(&self.pool, &partition, &mut sums, |i| a[i] * b[i]);

        let mut total = sums[0];
        for partial in &sums[1..] {
            total += partial;
        }
        total
    }
}
