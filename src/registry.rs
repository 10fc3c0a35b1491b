//! Kernel registry for discovery and execution by name.
//!
//! Every kernel exposes the same surface: a list of variants that share one
//! output contract, a plan that binds them to generated inputs, and a
//! self-check against its reference.

use crate::config::{BenchConfig, DEFAULT_LENGTH};
use crate::error::BenchResult;
use crate::utils::bench::Ticks;
use crate::utils::validate::Validation;
use crate::utils::VariantSummary;

/// A single variant bound to its input, ready to be timed.
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs ONE invocation and returns `(elapsed_ticks, validation)`.
    /// Timing happens inside the closure; validation happens after the end
    /// timestamp so it is never part of the measurement.
    pub run: Box<dyn FnMut() -> (Ticks, Validation) + 'a>,
}

/// Variants of one kernel bound to one problem size.
pub struct BenchPlan<'a> {
    /// Floating-point operations per invocation, fixed by the problem size.
    pub flops: u64,
    /// Executed in this order.
    pub variants: Vec<VariantClosure<'a>>,
}

/// Trait that all kernel runners must implement
pub trait KernelRunner: Send + Sync {
    /// Name used on the command line (e.g., "dot")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "reduction", "tasking")
    fn category(&self) -> &'static str;

    /// Problem size used when `--length` is not given
    fn default_length(&self) -> usize {
        DEFAULT_LENGTH
    }

    /// Whether the kernel has a block mode selectable with `--block`
    fn supports_block(&self) -> bool {
        false
    }

    /// Variants that `plan` would run for `config`, in run order
    fn available_variants(&self, config: &BenchConfig) -> &'static [VariantSummary];

    /// Generate inputs for `config` and bind every variant to them.
    fn plan<'a>(&'a self, config: &BenchConfig) -> BenchResult<BenchPlan<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Registry of all kernels
pub struct KernelRegistry {
    kernels: Vec<Box<dyn KernelRunner>>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self {
            kernels: Vec::new(),
        }
    }

    pub fn register<K: KernelRunner + 'static>(&mut self, kernel: K) {
        self.kernels.push(Box::new(kernel));
    }

    pub fn all(&self) -> &[Box<dyn KernelRunner>] {
        &self.kernels
    }

    /// Find kernel by name
    pub fn find(&self, name: &str) -> Option<&dyn KernelRunner> {
        self.kernels
            .iter()
            .find(|k| k.name() == name)
            .map(|k| k.as_ref())
    }
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all kernels
pub fn build_registry() -> KernelRegistry {
    let mut registry = KernelRegistry::new();

    registry.register(crate::math::dot_product::DotProductRunner);
    registry.register(crate::math::triad::TriadRunner);
    registry.register(crate::tasking::fib::FibRunner);

    registry
}
