//! Static partitioning of an index range across a fixed worker count.
//!
//! A partition is decided entirely at call time from `(len, workers)`: every
//! worker gets a disjoint subset of `0..len` and the union of all subsets is
//! the whole range, each index appearing exactly once.

use std::iter::StepBy;
use std::ops::Range;

/// How indices are dealt out to workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// Worker `p` owns `{p, p + workers, p + 2 * workers, ...}`.
    Strided,
    /// Worker `p` owns one contiguous block; the first `len % workers`
    /// blocks are one element longer.
    Contiguous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticPartition {
    scheme: Scheme,
    len: usize,
    workers: usize,
}

impl StaticPartition {
    /// # Panics
    /// Panics if `workers` is zero.
    pub fn new(scheme: Scheme, len: usize, workers: usize) -> Self {
        assert!(workers > 0, "a partition needs at least one worker");
        Self {
            scheme,
            len,
            workers,
        }
    }

    pub fn strided(len: usize, workers: usize) -> Self {
        Self::new(Scheme::Strided, len, workers)
    }

    pub fn contiguous(len: usize, workers: usize) -> Self {
        Self::new(Scheme::Contiguous, len, workers)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Indices owned by `worker`, in increasing order.
    ///
    /// # Panics
    /// Panics if `worker >= self.workers()`.
    pub fn indices(&self, worker: usize) -> StepBy<Range<usize>> {
        assert!(
            worker < self.workers,
            "worker {} out of range for {} workers",
            worker,
            self.workers
        );

        match self.scheme {
            Scheme::Strided => (worker.min(self.len)..self.len).step_by(self.workers),
            Scheme::Contiguous => self.block(worker).step_by(1),
        }
    }

    fn block(&self, worker: usize) -> Range<usize> {
        let base = self.len / self.workers;
        let extra = self.len % self.workers;
        let start = worker * base + worker.min(extra);
        let size = base + usize::from(worker < extra);
        start..start + size
    }
}
