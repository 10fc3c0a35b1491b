//! Dot product implementations.
//!
//! This module contains all implementation variants of the plain dot
//! product. They share one output contract and differ only in how the
//! reduction is parallelised.

mod builtin_reduction;
mod fixed_stride;
mod reference;
mod work_shared;

pub use builtin_reduction::BuiltinReduction;
pub use fixed_stride::FixedStride;
pub use reference::{dot_ref, Reference};
pub use work_shared::WorkShared;

use crate::error::BenchResult;
use crate::utils::fork_join::worker_pool;
use crate::utils::{VariantInfo, VariantSummary};

/// Number of workers every parallel variant forces.
pub const WORKERS: usize = 4;

/// Name of the variant the others are checked against.
pub const REFERENCE: &str = "dot_ref";

/// Trait for dot product implementations
pub trait DotProduct: Send + Sync {
    /// Compute the dot product of two slices of equal length.
    fn dot(&self, a: &[f64], b: &[f64]) -> f64;
}

/// Boxed strategy as stored in the variant table
pub type DotProductFn = Box<dyn DotProduct>;

/// Variants in the order they are benchmarked.
pub const VARIANTS: [VariantSummary; 4] = [
    VariantSummary {
        name: REFERENCE,
        description: "Sequential left-to-right accumulation",
    },
    VariantSummary {
        name: "dot_opt1",
        description: "4 threads, interleaved indices, shared partial-sum array",
    },
    VariantSummary {
        name: "dot_opt2",
        description: "4 pool threads, contiguous blocks, shared partial-sum array",
    },
    VariantSummary {
        name: "dot_opt3",
        description: "4 pool threads, built-in parallel reduction",
    },
];

/// Build every variant of [`VARIANTS`], sharing one 4-thread pool.
pub fn available_variants() -> BenchResult<Vec<VariantInfo<DotProductFn>>> {
    let pool = worker_pool(WORKERS)?;
    let [reference, opt1, opt2, opt3] = VARIANTS;

    Ok(vec![
        VariantInfo {
            name: reference.name,
            description: reference.description,
            function: Box::new(Reference),
        },
        VariantInfo {
            name: opt1.name,
            description: opt1.description,
            function: Box::new(FixedStride::<WORKERS>),
        },
        VariantInfo {
            name: opt2.name,
            description: opt2.description,
            function: Box::new(WorkShared::<WORKERS>::new(pool.clone())),
        },
        VariantInfo {
            name: opt3.name,
            description: opt3.description,
            function: Box::new(BuiltinReduction::new(pool)),
        },
    ])
}
