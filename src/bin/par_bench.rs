//! CLI for running the parallel kernels.
//!
//! Usage:
//!   par-bench                      # Dot product, length 100, 10 reps
//!   par-bench -n 1000000 -r 5      # Bigger vectors, fewer reps
//!   par-bench --block              # Block dot product
//!   par-bench triad                # Run another kernel
//!   par-bench --list               # List available kernels

use clap::Parser;
use par_kernels::config::{Args, BenchConfig};
use par_kernels::error::{BenchError, BenchResult};
use par_kernels::registry::build_registry;
use par_kernels::tui;

fn run(args: &Args) -> BenchResult<()> {
    let registry = build_registry();

    if args.list {
        tui::print_available_kernels(&registry);
        return Ok(());
    }

    let kernel = registry
        .find(&args.kernel)
        .ok_or_else(|| BenchError::UnknownKernel(args.kernel.clone()))?;
    let config = BenchConfig::resolve(args, kernel.default_length(), kernel.supports_block())?;
    log::debug!("running kernel {} with {:?}", kernel.name(), config);

    tui::print_header();
    par_kernels::run_kernel(kernel, &config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
