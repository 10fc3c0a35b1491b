//! Fork-join helpers for per-worker partial sums.
//!
//! Each worker owns exactly one slot of the caller's partial-sum array and
//! accumulates into it in place; the slots sit next to each other in memory,
//! so neighbouring workers contend for the same cache line. The fork returns
//! only after every worker has finished, so the caller may read the slots
//! right away.
//!
//! Workers never keep a pin inherited from the driver: they run on whatever
//! cores the driver was allowed before it pinned itself.

use super::cpu_affinity::WorkerAffinity;
use super::partition::StaticPartition;
use crate::error::BenchResult;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Build a pool with exactly `workers` threads.
pub fn worker_pool(workers: usize) -> BenchResult<Arc<ThreadPool>> {
    let affinity = WorkerAffinity::inherit();
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("par-worker-{}", i))
        .start_handler(move |_| affinity.apply())
        .build()?;
    log::debug!("built worker pool with {} threads", workers);
    Ok(Arc::new(pool))
}

/// Spawn one scoped thread per worker; worker `p` adds `body(i)` into
/// `partials[p]` for every index it owns.
///
/// # Panics
/// Panics if `partials.len() != partition.workers()`.
pub fn accumulate_scoped<F>(partition: &StaticPartition, partials: &mut [f64], body: F)
where
    F: Fn(usize) -> f64 + Sync,
{
    assert_eq!(
        partials.len(),
        partition.workers(),
        "one partial-sum slot per worker"
    );

    let body = &body;
    let affinity = WorkerAffinity::inherit();
    std::thread::scope(|s| {
        for (worker, slot) in partials.iter_mut().enumerate() {
            s.spawn(move || {
                affinity.apply();
                for i in partition.indices(worker) {
                    *slot += body(i);
                }
            });
        }
    });
}

/// Same contract as [`accumulate_scoped`], but the per-worker blocks are
/// handed to the threads of `pool`.
///
/// # Panics
/// Panics if `partials.len() != partition.workers()`.
pub fn accumulate_pooled<F>(
    pool: &ThreadPool,
    partition: &StaticPartition,
    partials: &mut [f64],
    body: F,
) where
    F: Fn(usize) -> f64 + Sync + Send,
{
    assert_eq!(
        partials.len(),
        partition.workers(),
        "one partial-sum slot per worker"
    );

    pool.install(|| {
        partials
            .par_iter_mut()
            .with_max_len(1)
            .enumerate()
            .for_each(|(worker, slot)| {
                for i in partition.indices(worker) {
                    *slot += body(i);
                }
            });
    });
}
