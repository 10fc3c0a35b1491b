//! # Par-Kernels
//!
//! Micro-benchmarks for parallel reductions: a dot product reduced four
//! ways (sequential, manual partial sums with two partitioning schemes, and
//! a built-in parallel reduction), a block dot product, the STREAM triad and
//! task-parallel Fibonacci. Every run is timed with a tick counter and
//! validated against a known result.

pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod tasking;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_kernel from utils::runner
pub use utils::runner::run_kernel;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{Args, BenchConfig};
    pub use crate::error::{BenchError, BenchResult};
    pub use crate::math::block_dot::{BlockDot, BlockInput, BlockResult};
    pub use crate::math::dot_product::{DotInput, DotProduct};
    pub use crate::registry::{build_registry, KernelRegistry, KernelRunner};
}
