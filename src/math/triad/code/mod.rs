//! STREAM triad implementations.

mod lanes;
mod parallel;
mod reference;

pub use lanes::Lanes;
pub use parallel::ParallelFor;
pub use reference::{triad_ref, Reference};

use crate::error::BenchResult;
use crate::math::dot_product::WORKERS;
use crate::utils::fork_join::worker_pool;
use crate::utils::{VariantInfo, VariantSummary};

/// Trait for triad implementations: `a[i] = b[i] + scalar * c[i]`.
pub trait Triad: Send + Sync {
    fn triad(&self, a: &mut [f64], b: &[f64], scalar: f64, c: &[f64]);
}

pub type TriadFn = Box<dyn Triad>;

pub const VARIANTS: [VariantSummary; 3] = [
    VariantSummary {
        name: "triad_ref",
        description: "Sequential indexed loop",
    },
    VariantSummary {
        name: "triad_simd",
        description: "Fixed 4-lane groups for auto-vectorisation",
    },
    VariantSummary {
        name: "triad_par",
        description: "Parallel-for on a 4-thread pool",
    },
];

pub fn available_variants() -> BenchResult<Vec<VariantInfo<TriadFn>>> {
    let pool = worker_pool(WORKERS)?;
    let [reference, simd, par] = VARIANTS;

    Ok(vec![
        VariantInfo {
            name: reference.name,
            description: reference.description,
            function: Box::new(Reference),
        },
        VariantInfo {
            name: simd.name,
            description: simd.description,
            function: Box::new(Lanes),
        },
        VariantInfo {
            name: par.name,
            description: par.description,
            function: Box::new(ParallelFor::new(pool)),
        },
    ])
}
