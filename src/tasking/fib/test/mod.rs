use super::code::*;
use super::FibRunner;
use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::registry::KernelRunner;
use crate::utils::runner::run_plan_with;
use crate::utils::validate::Validation;

#[test]
fn test_known_values() {
    let first: Vec<u64> = (0..10).map(fib_iter).collect();
    assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    assert_eq!(fib_seq(20), 6765);
    assert_eq!(fib_iter(MAX_N), 7_540_113_804_746_346_429);
}

#[test]
fn test_task_matches_sequential_above_cutoff() {
    let pool = crate::utils::fork_join::worker_pool(4).unwrap();
    for n in [SEQUENTIAL_CUTOFF, SEQUENTIAL_CUTOFF + 1, 30] {
        assert_eq!(pool.install(|| fib_task(n)), fib_seq(n), "n = {}", n);
    }
}

#[test]
fn test_naive_additions() {
    // fib_seq(4) makes 9 calls, 4 of which add
    assert_eq!(naive_additions(4), 4);
    assert_eq!(naive_additions(0), 0);
    assert_eq!(naive_additions(1), 0);
}

#[test]
fn test_plan_flops_and_results() {
    let config = BenchConfig {
        length: 22,
        nreps: 2,
        block: false,
    };
    let runner = FibRunner;
    let plan = runner.plan(&config).unwrap();
    assert_eq!(plan.flops, fib_iter(23) - 1);

    let mut records = Vec::new();
    run_plan_with(plan, config.nreps, |record| records.push(record));
    assert_eq!(records.len(), 6);
    assert!(records.iter().all(|r| r.status == Validation::Passed));
}

#[test]
fn test_overflowing_n_rejected() {
    let config = BenchConfig {
        length: 93,
        nreps: 1,
        block: false,
    };
    assert!(matches!(
        FibRunner.plan(&config),
        Err(BenchError::InvalidConfig(_))
    ));
}
