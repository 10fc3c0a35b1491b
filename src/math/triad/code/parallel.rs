use super::Triad;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;

/// Parallel-for over the output on a fixed pool.
pub struct ParallelFor {
    pool: Arc<ThreadPool>,
}

impl ParallelFor {
    pub fn new(pool: Arc<ThreadPool>) -> Self {
        Self { pool }
    }
}

impl Triad for ParallelFor {
    #[inline(never)]
    fn triad(&self, a: &mut [f64], b: &[f64], scalar: f64, c: &[f64]) {
        assert!(a.len() == b.len() && b.len() == c.len(), "Vectors must have the same length");

        self.pool.install(|| {
            a.par_iter_mut()
                .zip(b.par_iter().zip(c.par_iter()))
                .for_each(|(x, (y, z))| *x = y + scalar * z);
        });
    }
}
