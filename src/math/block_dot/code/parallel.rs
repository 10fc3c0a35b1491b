//! Cells of the output matrix spread over a worker pool.
//!
//! Every cell is still one sequential dot product, so the output is
//! bit-identical to the reference.

use super::BlockDot;
use crate::math::block_dot::input::{BlockInput, BlockResult, K};
use crate::math::dot_product::dot_ref;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;

pub struct ParallelBlock {
    pool: Arc<ThreadPool>,
}

impl ParallelBlock {
    pub fn new(pool: Arc<ThreadPool>) -> Self {
        Self { pool }
    }
}

impl BlockDot for ParallelBlock {
    #[inline(never)]
    fn compute(&self, input: &BlockInput) -> BlockResult {
        let mut result = BlockResult::default();
        self.pool.install(|| {
            result
                .cells_mut()
                .par_iter_mut()
                .enumerate()
                .for_each(|(cell, out)| {
                    *out = dot_ref(input.row_a(cell / K), input.row_b(cell % K));
                });
        });
        result
    }
}
