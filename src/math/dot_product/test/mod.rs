use super::code::*;
use super::{plan, DotInput};
use crate::utils::fork_join::accumulate_scoped;
use crate::utils::partition::StaticPartition;
use crate::utils::runner::run_plan_with;
use crate::utils::validate::{Validation, TOLERANCE};
use std::sync::atomic::{AtomicUsize, Ordering};

fn assert_close(got: f64, expected: f64, msg: &str) {
    let diff = (got - expected).abs();
    assert!(
        diff <= TOLERANCE,
        "{}: expected {}, got {}, diff = {}",
        msg,
        expected,
        got,
        diff
    );
}

#[test]
fn test_reference_known_values() {
    let input = DotInput::generate(10);
    assert_eq!(dot_ref(input.a(), input.b()), 20.0);

    let input = DotInput::generate(1);
    assert_eq!(dot_ref(input.a(), input.b()), 2.0);
}

#[test]
fn test_reference_matches_closed_form() {
    for length in (1..=257).chain([1000, 10_000]) {
        let input = DotInput::generate(length);
        assert_close(
            dot_ref(input.a(), input.b()),
            input.expected(),
            &format!("dot_ref length {}", length),
        );
    }
}

#[test]
fn test_reference_empty() {
    assert_eq!(dot_ref(&[], &[]), 0.0);
}

#[test]
#[should_panic(expected = "same length")]
fn test_reference_length_mismatch() {
    dot_ref(&[1.0, 2.0], &[1.0]);
}

#[test]
fn test_all_variants_agree() {
    let variants = available_variants().unwrap();
    assert_eq!(variants.len(), 4);

    for length in [1, 4, 16, 100, 10_000] {
        let input = DotInput::generate(length);
        let results: Vec<(&str, f64)> = variants
            .iter()
            .map(|v| (v.name, v.function.dot(input.a(), input.b())))
            .collect();

        for (name_a, a) in &results {
            for (name_b, b) in &results {
                assert_close(*a, *b, &format!("{} vs {} at length {}", name_a, name_b, length));
            }
        }
    }
}

#[test]
fn test_variants_on_short_vectors() {
    let variants = available_variants().unwrap();
    // Fewer elements than workers leaves some partitions empty
    for length in [1, 2, 3, 5, 6, 7] {
        let input = DotInput::generate(length);
        for v in &variants {
            assert_close(
                v.function.dot(input.a(), input.b()),
                input.expected(),
                &format!("{} at length {}", v.name, length),
            );
        }
    }
}

#[test]
fn test_variants_on_empty_vectors() {
    for v in available_variants().unwrap() {
        assert_eq!(v.function.dot(&[], &[]), 0.0, "{}", v.name);
    }
}

#[test]
fn test_fixed_stride_visits_every_index_once() {
    for length in [1, 2, 3, 5, 6, 7, 9, 10, 11, 99, 1001] {
        let visits: Vec<AtomicUsize> = (0..length).map(|_| AtomicUsize::new(0)).collect();
        let partition = StaticPartition::strided(length, WORKERS);
        let mut sums = [0.0; WORKERS];

        accumulate_scoped(&partition, &mut sums, |i| {
            visits[i].fetch_add(1, Ordering::Relaxed);
            0.0
        });

        for (i, v) in visits.iter().enumerate() {
            assert_eq!(v.load(Ordering::Relaxed), 1, "index {} at length {}", i, length);
        }
    }
}

#[test]
fn test_generator_is_deterministic() {
    let first = DotInput::generate(1000);
    let second = DotInput::generate(1000);

    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(first.a()), bits(second.a()));
    assert_eq!(bits(first.b()), bits(second.b()));
}

#[test]
fn test_generator_values() {
    let input = DotInput::generate(4);
    assert_eq!(input.a(), &[2.0, 4.0, 6.0, 8.0]);
    assert_eq!(input.b(), &[1.0, 0.5, 1.0 / 3.0, 0.25]);
    assert_eq!(input.expected(), 8.0);
}

#[test]
fn test_plan_reports_fixed_flops() {
    let length = 100;
    let plan = plan(length).unwrap();
    assert_eq!(plan.flops, 2 * length as u64);

    let mut records = Vec::new();
    run_plan_with(plan, 2, |record| records.push(record));

    let names: Vec<&str> = records.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["dot_ref", "dot_ref", "dot_opt1", "dot_opt1", "dot_opt2", "dot_opt2", "dot_opt3", "dot_opt3"]
    );
    for record in &records {
        assert_eq!(record.flops, 200);
        assert_eq!(record.status, Validation::Passed, "{}", record.name);
    }
}
