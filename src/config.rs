//! Command-line arguments and the resolved benchmark configuration.

use crate::error::{BenchError, BenchResult};
use clap::Parser;

/// Vector length used by the dot kernel when `--length` is omitted.
pub const DEFAULT_LENGTH: usize = 100;
/// Repetitions per variant when `--nreps` is omitted.
pub const DEFAULT_NREPS: usize = 10;

/// Parallel reduction micro-benchmarks.
#[derive(Parser, Debug, Clone)]
#[command(name = "par-bench", author, version, about, long_about = None)]
pub struct Args {
    /// Length of each vector (problem size; kernel default when omitted)
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Number of repetitions
    #[arg(short = 'r', long, default_value_t = DEFAULT_NREPS)]
    pub nreps: usize,

    /// Compute block dot products (versus a single dot product)
    #[arg(short, long)]
    pub block: bool,

    /// List available kernels and exit
    #[arg(short, long)]
    pub list: bool,

    /// Kernel to run
    #[arg(default_value = "dot")]
    pub kernel: String,
}

/// Problem configuration shared by every kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub length: usize,
    pub nreps: usize,
    pub block: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            nreps: DEFAULT_NREPS,
            block: false,
        }
    }
}

impl BenchConfig {
    /// Resolve parsed arguments against the selected kernel's defaults.
    pub fn resolve(args: &Args, default_length: usize, supports_block: bool) -> BenchResult<Self> {
        if args.block && !supports_block {
            return Err(BenchError::InvalidConfig(format!(
                "--block is not supported by kernel `{}`",
                args.kernel
            )));
        }

        let config = Self {
            length: args.length.unwrap_or(default_length),
            nreps: args.nreps,
            block: args.block,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.length == 0 {
            return Err(BenchError::InvalidConfig(
                "length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
