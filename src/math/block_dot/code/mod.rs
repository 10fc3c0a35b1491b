//! Block dot product implementations.

mod optimized;
mod parallel;
mod reference;

pub use optimized::OptimizedBlock;
pub use parallel::ParallelBlock;
pub use reference::ReferenceBlock;

use super::input::{BlockInput, BlockResult};
use crate::error::BenchResult;
use crate::math::dot_product::WORKERS;
use crate::utils::fork_join::worker_pool;
use crate::utils::{VariantInfo, VariantSummary};

/// Name of the variant the others are checked against.
pub const REFERENCE: &str = "bdot_ref";

/// Strategy interface for `C = A * B^T` over a [`BlockInput`].
///
/// The harness does not care how an implementation schedules its work.
pub trait BlockDot: Send + Sync {
    fn compute(&self, input: &BlockInput) -> BlockResult;
}

pub type BlockDotFn = Box<dyn BlockDot>;

/// Variants in the order they are benchmarked.
pub const VARIANTS: [VariantSummary; 3] = [
    VariantSummary {
        name: REFERENCE,
        description: "One sequential dot product per output cell",
    },
    VariantSummary {
        name: "bdot_opt",
        description: "Replaceable strategy slot (reference by default)",
    },
    VariantSummary {
        name: "bdot_par",
        description: "Output cells computed on a 4-thread pool",
    },
];

/// Variants in benchmark order, with the default `bdot_opt` slot.
pub fn available_variants() -> BenchResult<Vec<VariantInfo<BlockDotFn>>> {
    with_optimized(OptimizedBlock::default())
}

/// Variants in benchmark order, with `optimized` in the `bdot_opt` slot.
pub fn with_optimized(optimized: OptimizedBlock) -> BenchResult<Vec<VariantInfo<BlockDotFn>>> {
    let pool = worker_pool(WORKERS)?;
    let [reference, opt, par] = VARIANTS;

    Ok(vec![
        VariantInfo {
            name: reference.name,
            description: reference.description,
            function: Box::new(ReferenceBlock),
        },
        VariantInfo {
            name: opt.name,
            description: opt.description,
            function: Box::new(optimized),
        },
        VariantInfo {
            name: par.name,
            description: par.description,
            function: Box::new(ParallelBlock::new(pool)),
        },
    ])
}
