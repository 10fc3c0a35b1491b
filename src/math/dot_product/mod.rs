//! # Dot Product Kernel
//!
//! Computes `dot(a, b) = Σ(a[i] * b[i])` four ways:
//!
//! - **dot_ref**: sequential accumulation, the correctness baseline
//! - **dot_opt1**: manual partial sums, interleaved partitions on 4 threads
//! - **dot_opt2**: manual partial sums, contiguous blocks from a 4-thread pool
//! - **dot_opt3**: built-in parallel reduction with private accumulators
//!
//! The two manual variants write their partial sums into adjacent slots of
//! one array, exposing false sharing between workers. With `--block` the
//! kernel switches to the block dot product in [`crate::math::block_dot`].

pub mod code;
pub mod input;
#[cfg(test)]
mod test;

pub use code::*;
pub use input::DotInput;

use crate::config::BenchConfig;
use crate::error::BenchResult;
use crate::math::block_dot;
use crate::registry::{BenchPlan, KernelRunner, VariantClosure};
use crate::utils::validate::{within_tolerance, Validation};
use crate::utils::VariantSummary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Bind the plain dot-product variants to inputs of `length`.
pub fn plan<'a>(length: usize) -> BenchResult<BenchPlan<'a>> {
    let input = Arc::new(DotInput::generate(length));
    let expected = input.expected();
    let flops = input.flops();

    let variants = code::available_variants()?
        .into_iter()
        .map(|v| {
            let input = Arc::clone(&input);
            let kernel = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (ticks, result) = crate::measure!(kernel.dot(input.a(), input.b()));
                    (ticks, Validation::scalar(result, expected))
                }),
            }
        })
        .collect();

    Ok(BenchPlan { flops, variants })
}

/// Runner for the dot product kernel
pub struct DotProductRunner;

impl KernelRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot"
    }

    fn description(&self) -> &'static str {
        "Parallel reductions of two vectors with a known closed-form dot product"
    }

    fn category(&self) -> &'static str {
        "reduction"
    }

    fn supports_block(&self) -> bool {
        true
    }

    fn available_variants(&self, config: &BenchConfig) -> &'static [VariantSummary] {
        if config.block {
            &block_dot::code::VARIANTS
        } else {
            &code::VARIANTS
        }
    }

    fn plan<'a>(&'a self, config: &BenchConfig) -> BenchResult<BenchPlan<'a>> {
        config.validate()?;
        if config.block {
            block_dot::plan(config.length)
        } else {
            plan(config.length)
        }
    }

    fn verify(&self) -> Result<(), String> {
        let variants = code::available_variants().map_err(|e| e.to_string())?;

        let mut rng = StdRng::seed_from_u64(0xd07_5eed);
        // Odd lengths are never a multiple of the worker count
        let random_lengths = (0..8).map(|_| rng.random_range(1..4096usize) | 1);
        let lengths: Vec<usize> = [1, 2, 3, 4, 16, 100, 10_000]
            .into_iter()
            .chain(random_lengths)
            .collect();

        for length in lengths {
            let input = DotInput::generate(length);
            let expected = input.expected();

            for variant in &variants {
                let result = variant.function.dot(input.a(), input.b());
                if !within_tolerance(result, expected) {
                    return Err(format!(
                        "Variant '{}' failed verification at length {}. Expected {}, got {}, diff {}",
                        variant.name,
                        length,
                        expected,
                        result,
                        (result - expected).abs()
                    ));
                }
            }
        }

        block_dot::verify()
    }
}
