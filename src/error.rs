//! Error types for the benchmark harness.
//!
//! Validation mismatches are not errors: they are reported as warnings and
//! the run continues. Everything here is fatal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unknown kernel `{0}` (use --list to see available kernels)")]
    UnknownKernel(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type BenchResult<T> = std::result::Result<T, BenchError>;
