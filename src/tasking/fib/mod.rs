//! # Task-Parallel Fibonacci
//!
//! Naive recursive Fibonacci, where each call above a cutoff forks its two
//! subcalls as tasks and joins them. `length` is interpreted as `n`.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::math::dot_product::WORKERS;
use crate::registry::{BenchPlan, KernelRunner, VariantClosure};
use crate::utils::fork_join::worker_pool;
use crate::utils::validate::Validation;
use crate::utils::VariantSummary;

pub struct FibRunner;

impl KernelRunner for FibRunner {
    fn name(&self) -> &'static str {
        "fib"
    }

    fn description(&self) -> &'static str {
        "Recursive Fibonacci with fork-join tasks (length = n)"
    }

    fn category(&self) -> &'static str {
        "tasking"
    }

    fn default_length(&self) -> usize {
        32
    }

    fn available_variants(&self, _config: &BenchConfig) -> &'static [VariantSummary] {
        &code::VARIANTS
    }

    fn plan<'a>(&'a self, config: &BenchConfig) -> BenchResult<BenchPlan<'a>> {
        config.validate()?;
        let n = config.length as u64;
        if n > MAX_N {
            return Err(BenchError::InvalidConfig(format!(
                "fib needs length <= {}, got {}",
                MAX_N, n
            )));
        }

        let pool = worker_pool(WORKERS)?;
        let expected = fib_iter(n);

        let variants = code::available_variants()
            .into_iter()
            .map(|v| {
                let pool = pool.clone();
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (ticks, result) = crate::measure!(pool.install(|| func(n)));
                        (ticks, Validation::exact(result, expected))
                    }),
                }
            })
            .collect();

        Ok(BenchPlan {
            flops: naive_additions(n),
            variants,
        })
    }

    fn verify(&self) -> Result<(), String> {
        let pool = worker_pool(WORKERS).map_err(|e| e.to_string())?;

        for n in 0..=28 {
            let expected = fib_iter(n);
            for variant in code::available_variants() {
                let result = pool.install(|| (variant.function)(n));
                if result != expected {
                    return Err(format!(
                        "Variant '{}' failed verification at n = {}. Expected {}, got {}",
                        variant.name, n, expected, result
                    ));
                }
            }
        }

        Ok(())
    }
}
