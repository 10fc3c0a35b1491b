//! Fibonacci implementations: naive recursion, recursion split into tasks,
//! and the linear loop used as the oracle.

use crate::utils::{VariantInfo, VariantSummary};

/// Below this `n` a task computes its subtree sequentially.
pub const SEQUENTIAL_CUTOFF: u64 = 20;

/// Largest `n` whose `fib(n + 1)` still fits in a `u64`.
pub const MAX_N: u64 = 92;

pub type FibFn = fn(u64) -> u64;

/// Naive doubly-recursive Fibonacci, `fib(0) = 0`, `fib(1) = 1`.
pub fn fib_seq(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    fib_seq(n - 1) + fib_seq(n - 2)
}

/// Naive recursion with both subcalls spawned as tasks above the cutoff.
///
/// Tasks run on whichever rayon pool the caller is installed in.
pub fn fib_task(n: u64) -> u64 {
    if n < SEQUENTIAL_CUTOFF {
        return fib_seq(n);
    }
    let (n1, n2) = rayon::join(|| fib_task(n - 1), || fib_task(n - 2));
    n1 + n2
}

/// Linear-time Fibonacci.
pub fn fib_iter(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    // Stops at fib(n) so fib(93), the largest u64 term, does not overflow
    let (mut prev, mut cur) = (0u64, 1u64);
    for _ in 1..n {
        let next = prev + cur;
        prev = cur;
        cur = next;
    }
    cur
}

/// Additions performed by the naive recursion for `n`: `fib(n + 1) - 1`.
pub fn naive_additions(n: u64) -> u64 {
    fib_iter(n + 1) - 1
}

pub const VARIANTS: [VariantSummary; 3] = [
    VariantSummary {
        name: "fib_seq",
        description: "Naive recursion on one thread",
    },
    VariantSummary {
        name: "fib_task",
        description: "Recursion split into fork-join tasks",
    },
    VariantSummary {
        name: "fib_iter",
        description: "Linear loop",
    },
];

pub fn available_variants() -> Vec<VariantInfo<FibFn>> {
    let functions: [FibFn; 3] = [fib_seq, fib_task, fib_iter];
    VARIANTS
        .into_iter()
        .zip(functions)
        .map(|(v, function)| VariantInfo {
            name: v.name,
            description: v.description,
            function,
        })
        .collect()
}
