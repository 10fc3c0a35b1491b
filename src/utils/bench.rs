//! Tick source used by the driver.
//!
//! By default (`cpu_cycles` feature) ticks are read from the hardware cycle
//! counter. With `--features use_time` (or `--no-default-features`) ticks
//! are nanoseconds elapsed since the first read in this process.

/// Opaque monotonic tick count. Only differences are meaningful.
pub type Ticks = u64;

// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use the monotonic clock if: use_time is enabled OR cpu_cycles is disabled

/// Read the current tick count.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Ticks {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Ticks {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_nanos() as Ticks
}

/// Ticks elapsed since `start`.
#[inline(always)]
pub fn elapsed(start: Ticks) -> Ticks {
    now().saturating_sub(start)
}

/// Name of the tick unit for the active tick source.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64", target_arch = "x86")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Time a single expression, returning `(elapsed_ticks, value)`.
///
/// The value goes through `black_box` before the end timestamp is taken so
/// the computation cannot be sunk past it.
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($body);
        ($crate::utils::bench::elapsed(start), value)
    }};
}
