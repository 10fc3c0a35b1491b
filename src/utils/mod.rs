//! Utility modules for timing, partitioning and reporting.

pub mod bench;
pub mod cpu_affinity;
pub mod fork_join;
pub mod partition;
pub mod runner;
pub mod tui;
pub mod validate;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use bench::{elapsed, now, unit_name, Ticks};
pub use cpu_affinity::CorePin;
pub use fork_join::{accumulate_pooled, accumulate_scoped, worker_pool};
pub use partition::{Scheme, StaticPartition};
pub use validate::{Validation, TOLERANCE};

/// Name and description of a variant, known without constructing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantSummary {
    pub name: &'static str,
    pub description: &'static str,
}

/// Information about a kernel implementation variant.
/// Generic over F, the strategy type.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "dot_ref", "dot_opt1")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation
    pub function: F,
}
