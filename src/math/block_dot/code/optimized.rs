//! Replaceable block strategy slot.
//!
//! The harness always benchmarks this slot under the same name; what runs
//! inside it is whatever strategy was injected. Without one it runs the
//! reference kernel.

use super::{BlockDot, ReferenceBlock};
use crate::math::block_dot::input::{BlockInput, BlockResult};

pub struct OptimizedBlock {
    strategy: Box<dyn BlockDot>,
}

impl OptimizedBlock {
    pub fn with_strategy(strategy: Box<dyn BlockDot>) -> Self {
        Self { strategy }
    }
}

impl Default for OptimizedBlock {
    fn default() -> Self {
        Self::with_strategy(Box::new(ReferenceBlock))
    }
}

impl BlockDot for OptimizedBlock {
    fn compute(&self, input: &BlockInput) -> BlockResult {
        self.strategy.compute(input)
    }
}
