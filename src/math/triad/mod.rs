//! # STREAM Triad
//!
//! `a[i] = b[i] + scalar * c[i]`: one multiply and one add per element,
//! bound by memory bandwidth rather than arithmetic. Inputs are chosen so
//! every output element has an exact closed-form value.

pub mod code;
pub mod input;
#[cfg(test)]
mod test;

pub use code::*;
pub use input::{TriadInput, SCALAR};

use crate::config::BenchConfig;
use crate::error::BenchResult;
use crate::registry::{BenchPlan, KernelRunner, VariantClosure};
use crate::utils::validate::{Validation, TOLERANCE};
use crate::utils::VariantSummary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn validate_output(a: &[f64]) -> Validation {
    let error = TriadInput::max_error(a);
    if error <= TOLERANCE {
        Validation::Passed
    } else {
        Validation::Failed(vec![format!(
            "Result failed to validate: max abs error {:e} over {} elements",
            error,
            a.len()
        )])
    }
}

pub struct TriadRunner;

impl KernelRunner for TriadRunner {
    fn name(&self) -> &'static str {
        "triad"
    }

    fn description(&self) -> &'static str {
        "STREAM triad a = b + scalar * c"
    }

    fn category(&self) -> &'static str {
        "streaming"
    }

    fn available_variants(&self, _config: &BenchConfig) -> &'static [VariantSummary] {
        &code::VARIANTS
    }

    fn plan<'a>(&'a self, config: &BenchConfig) -> BenchResult<BenchPlan<'a>> {
        config.validate()?;
        let input = Arc::new(TriadInput::generate(config.length));
        let flops = input.flops();

        let variants = code::available_variants()?
            .into_iter()
            .map(|v| {
                let input = Arc::clone(&input);
                let kernel = v.function;
                let mut out = vec![0.0; input.len()];

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        // Stale output from the previous repetition must not validate
                        out.fill(f64::NAN);
                        let (ticks, ()) =
                            crate::measure!(kernel.triad(&mut out, input.b(), SCALAR, input.c()));
                        (ticks, validate_output(&out))
                    }),
                }
            })
            .collect();

        Ok(BenchPlan { flops, variants })
    }

    fn verify(&self) -> Result<(), String> {
        let variants = code::available_variants().map_err(|e| e.to_string())?;

        let mut rng = StdRng::seed_from_u64(0x7_1ad);
        let lengths: Vec<usize> = [1, 3, 4, 5, 1000]
            .into_iter()
            .chain((0..4).map(|_| rng.random_range(1..8192usize)))
            .collect();

        for length in lengths {
            let input = TriadInput::generate(length);
            for variant in &variants {
                let mut out = vec![f64::NAN; length];
                variant.function.triad(&mut out, input.b(), SCALAR, input.c());
                if let Validation::Failed(messages) = validate_output(&out) {
                    return Err(format!(
                        "Variant '{}' failed verification at length {}: {}",
                        variant.name,
                        length,
                        messages.join("; ")
                    ));
                }
            }
        }

        Ok(())
    }
}
