//! Runtime-provided reduction.
//!
//! Each pool thread folds its share into a private accumulator and rayon
//! combines the accumulators; no state is shared between workers and there
//! is no combine step here. The combine tree depends on how the work was
//! split, so results are reproducible only to within rounding.

use super::DotProduct;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;

pub struct BuiltinReduction {
    pool: Arc<ThreadPool>,
}

impl BuiltinReduction {
    pub fn new(pool: Arc<ThreadPool>) -> Self {
        Self { pool }
    }
}

impl DotProduct for BuiltinReduction {
    #[inline(never)]
    fn dot(&self, a: &[f64], b: &[f64]) -> f64 {
        assert_eq!(a.len(), b.len(), "Vectors must have the same length");

        self.pool.install(|| {
            a.par_iter()
                .zip(b.par_iter())
                .map(|(x, y)| x * y)
                .sum::<f64>()
        })
    }
}
