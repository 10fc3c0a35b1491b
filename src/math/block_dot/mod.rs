//! # Block Dot Product
//!
//! All pairwise dot products between the `J` rows of `A` and the `K` rows of
//! `B`, computed in one batched call. There is no closed form for the
//! generated inputs, so `bdot_ref` is the oracle: every other variant is
//! checked cell by cell against the reference output.

pub mod code;
pub mod input;
#[cfg(test)]
mod test;

pub use code::*;
pub use input::{BlockInput, BlockResult, J, K};

use crate::error::BenchResult;
use crate::registry::{BenchPlan, VariantClosure};
use crate::utils::validate::Validation;
use crate::utils::VariantInfo;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Bind the default block variants to inputs of `length`.
pub fn plan<'a>(length: usize) -> BenchResult<BenchPlan<'a>> {
    Ok(plan_with(length, code::available_variants()?))
}

/// Bind `variants` to inputs of `length`.
///
/// The reference output is computed once up front, outside any timing.
pub fn plan_with<'a>(length: usize, variants: Vec<VariantInfo<BlockDotFn>>) -> BenchPlan<'a> {
    let input = Arc::new(BlockInput::generate(length));
    let reference = ReferenceBlock.compute(&input);
    let flops = input.flops();

    let variants = variants
        .into_iter()
        .map(|v| {
            let input = Arc::clone(&input);
            let kernel = v.function;
            let is_reference = v.name == code::REFERENCE;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (ticks, result) = crate::measure!(kernel.compute(&input));
                    let status = if is_reference {
                        Validation::Reference
                    } else {
                        Validation::from_mismatches(result.mismatches(&reference))
                    };
                    (ticks, status)
                }),
            }
        })
        .collect();

    BenchPlan { flops, variants }
}

/// Check every block variant against the reference on a few lengths.
pub fn verify() -> Result<(), String> {
    let variants = code::available_variants().map_err(|e| e.to_string())?;

    let mut rng = StdRng::seed_from_u64(0xb10c_d07);
    let lengths: Vec<usize> = [1, 3, 64]
        .into_iter()
        .chain((0..4).map(|_| rng.random_range(1..2048usize)))
        .collect();

    for length in lengths {
        let input = BlockInput::generate(length);
        let reference = ReferenceBlock.compute(&input);

        for variant in &variants {
            let mismatches = variant.function.compute(&input).mismatches(&reference);
            if let Some(first) = mismatches.first() {
                return Err(format!(
                    "Variant '{}' failed verification at length {}: {} ({} cells)",
                    variant.name,
                    length,
                    first,
                    mismatches.len()
                ));
            }
        }
    }

    Ok(())
}
