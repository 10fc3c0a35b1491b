use super::code::*;
use super::input::{BlockInput, BlockResult, J, K};
use super::{plan, plan_with};
use crate::math::dot_product::dot_ref;
use crate::utils::runner::run_plan_with;
use crate::utils::validate::Validation;
use crate::utils::VariantInfo;

/// Plain row-by-column summation, written out independently of any variant.
fn naive(input: &BlockInput) -> BlockResult {
    let mut out = BlockResult::default();
    for j in 0..J {
        for k in 0..K {
            let mut sum = 0.0;
            for i in 0..input.length() {
                sum += input.row_a(j)[i] * input.row_b(k)[i];
            }
            out.set(j, k, sum);
        }
    }
    out
}

#[test]
fn test_reference_matches_rowwise_dot() {
    for length in [1, 2, 7, 100, 1000] {
        let input = BlockInput::generate(length);
        let result = ReferenceBlock.compute(&input);
        for j in 0..J {
            for k in 0..K {
                assert_eq!(
                    result.get(j, k),
                    dot_ref(input.row_a(j), input.row_b(k)),
                    "C[{}][{}] at length {}",
                    j,
                    k,
                    length
                );
            }
        }
        assert_eq!(result, naive(&input));
    }
}

#[test]
fn test_generator_values() {
    let input = BlockInput::generate(2);
    assert_eq!(input.row_a(0), &[1001.0, 2001.0]);
    assert_eq!(input.row_a(7), &[1008.0, 2008.0]);
    assert_eq!(input.row_b(0), &[1.0 / 1001.0, 1.0 / 2001.0]);
    assert_eq!(input.row_b(3), &[1.0 / 1004.0, 1.0 / 2004.0]);
}

#[test]
fn test_generator_is_deterministic() {
    assert_eq!(BlockInput::generate(333), BlockInput::generate(333));
}

#[test]
fn test_single_element_cells() {
    // With one element C[j][k] = (1000 + j + 1) / (1000 + k + 1)
    let input = BlockInput::generate(1);
    let result = ReferenceBlock.compute(&input);
    for j in 0..J {
        for k in 0..K {
            let expected = (1001 + j) as f64 * (1.0 / (1001 + k) as f64);
            assert_eq!(result.get(j, k), expected);
        }
    }
}

#[test]
fn test_all_variants_match_reference() {
    let variants = available_variants().unwrap();
    let names: Vec<_> = variants.iter().map(|v| v.name).collect();
    assert_eq!(names, vec!["bdot_ref", "bdot_opt", "bdot_par"]);

    for length in [1, 5, 128, 999] {
        let input = BlockInput::generate(length);
        let reference = ReferenceBlock.compute(&input);
        for v in &variants {
            let result = v.function.compute(&input);
            assert!(result.mismatches(&reference).is_empty(), "{} at {}", v.name, length);
        }
    }
}

#[test]
fn test_mismatches_reports_each_cell() {
    let reference = BlockResult::default();
    let mut result = BlockResult::default();
    result.set(1, 2, 1.0);
    result.set(7, 3, -1.0);

    let messages = result.mismatches(&reference);
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Result[1,2]"));
    assert!(messages[1].starts_with("Result[7,3]"));
}

#[test]
fn test_plan_flops_and_validation() {
    let length = 50;
    let plan = plan(length).unwrap();
    assert_eq!(plan.flops, (2 * 8 * 4 * length) as u64);

    let mut records = Vec::new();
    run_plan_with(plan, 1, |record| records.push(record));

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].status, Validation::Reference);
    assert_eq!(records[1].status, Validation::Passed);
    assert_eq!(records[2].status, Validation::Passed);
    assert!(records.iter().all(|r| r.flops == 3200));
}

struct Broken;

impl BlockDot for Broken {
    fn compute(&self, _input: &BlockInput) -> BlockResult {
        BlockResult::default()
    }
}

#[test]
fn test_injected_strategy_is_validated() {
    let variants = with_optimized(OptimizedBlock::with_strategy(Box::new(Broken))).unwrap();
    let plan = plan_with(10, variants);

    let mut records = Vec::new();
    run_plan_with(plan, 2, |record| records.push(record));

    let opt: Vec<_> = records.iter().filter(|r| r.name == "bdot_opt").collect();
    assert_eq!(opt.len(), 2);
    for record in opt {
        assert!(record.status.is_failure());
        assert_eq!(record.status.messages().len(), J * K);
    }
    // The run carries on to the next variant
    assert!(records.iter().any(|r| r.name == "bdot_par" && r.status == Validation::Passed));
}

#[test]
fn test_custom_variant_list() {
    let variants = vec![VariantInfo {
        name: "bdot_only",
        description: "custom",
        function: Box::new(ReferenceBlock) as BlockDotFn,
    }];
    let plan = plan_with(4, variants);
    assert_eq!(plan.variants.len(), 1);
    assert_eq!(plan.variants[0].name, "bdot_only");
}
