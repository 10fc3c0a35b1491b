//! Timing & reporting driver.
//!
//! Variants run in their declared order, one repetition at a time, on the
//! calling thread. Each repetition produces one [`ReportRecord`] that is
//! handed to a sink and then dropped.

use super::bench::Ticks;
use super::cpu_affinity::CorePin;
use super::tui;
use super::validate::Validation;
use crate::config::BenchConfig;
use crate::error::BenchResult;
use crate::registry::{BenchPlan, KernelRunner};

/// Outcome of one timed repetition of one variant.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRecord {
    pub name: &'static str,
    pub flops: u64,
    pub ticks: Ticks,
    /// `flops / ticks`
    pub rate: f64,
    pub status: Validation,
}

impl ReportRecord {
    pub fn new(name: &'static str, flops: u64, ticks: Ticks, status: Validation) -> Self {
        // A coarse tick source can report zero for tiny problems
        let rate = flops as f64 / ticks.max(1) as f64;
        Self {
            name,
            flops,
            ticks,
            rate,
            status,
        }
    }
}

/// Run every variant of `plan` `nreps` times, passing each record to `sink`.
///
/// The calling thread is pinned while a repetition runs; threads a variant
/// spawns are released from that pin (see [`super::cpu_affinity`]).
pub fn run_plan_with<F>(plan: BenchPlan<'_>, nreps: usize, mut sink: F)
where
    F: FnMut(ReportRecord),
{
    let flops = plan.flops;
    for mut variant in plan.variants {
        log::debug!("running {} ({}) x{}", variant.name, variant.description, nreps);
        for rep in 0..nreps {
            let (ticks, status) = {
                let _pin = CorePin::current();
                (variant.run)()
            };

            if status.is_failure() {
                log::warn!(
                    "{} repetition {} failed validation: {}",
                    variant.name,
                    rep,
                    status.messages().join("; ")
                );
            }
            sink(ReportRecord::new(variant.name, flops, ticks, status));
        }
    }
}

/// Plan and run a kernel with the given configuration.
pub fn run_kernel(kernel: &dyn KernelRunner, config: &BenchConfig) -> BenchResult<()> {
    config.validate()?;
    tui::print_kernel_info_box(kernel, config);

    let plan = kernel.plan(config)?;
    tui::print_table_header(config.block);
    run_plan_with(plan, config.nreps, |record| {
        tui::print_record(&record, config.block)
    });
    println!();
    Ok(())
}
