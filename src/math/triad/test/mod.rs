use super::code::*;
use super::input::{TriadInput, SCALAR};
use super::TriadRunner;
use crate::config::BenchConfig;
use crate::registry::KernelRunner;
use crate::utils::runner::run_plan_with;
use crate::utils::validate::Validation;

#[test]
fn test_reference_closed_form() {
    let input = TriadInput::generate(5);
    let mut a = vec![0.0; 5];
    triad_ref(&mut a, input.b(), SCALAR, input.c());
    assert_eq!(a, vec![7.0, 8.0, 9.0, 10.0, 11.0]);
}

#[test]
fn test_all_variants_match_reference() {
    let variants = available_variants().unwrap();
    for length in [1, 2, 3, 4, 5, 7, 8, 9, 1023, 4096] {
        let input = TriadInput::generate(length);
        let mut expected = vec![0.0; length];
        triad_ref(&mut expected, input.b(), SCALAR, input.c());

        for v in &variants {
            let mut a = vec![f64::NAN; length];
            v.function.triad(&mut a, input.b(), SCALAR, input.c());
            assert_eq!(a, expected, "{} at length {}", v.name, length);
        }
    }
}

#[test]
fn test_max_error_flags_nan() {
    assert_eq!(TriadInput::max_error(&[7.0, 8.0]), 0.0);
    assert!(TriadInput::max_error(&[7.0, f64::NAN]).is_nan());
    assert_eq!(TriadInput::max_error(&[7.5, 8.0]), 0.5);
}

#[test]
#[should_panic(expected = "same length")]
fn test_length_mismatch_panics() {
    let mut a = vec![0.0; 3];
    triad_ref(&mut a, &[1.0, 2.0], SCALAR, &[1.0, 2.0, 3.0]);
}

#[test]
fn test_plan_runs_and_validates() {
    let config = BenchConfig {
        length: 257,
        nreps: 3,
        block: false,
    };
    let runner = TriadRunner;
    let plan = runner.plan(&config).unwrap();
    assert_eq!(plan.flops, 514);

    let mut records = Vec::new();
    run_plan_with(plan, config.nreps, |record| records.push(record));

    assert_eq!(records.len(), 9);
    assert!(records.iter().all(|r| r.status == Validation::Passed));
}
