//! Hardware tick counter.
//!
//! The value is a nominal cycle count on x86 (time stamp counter) and the
//! virtual timer count on aarch64. It is monotonic within a process but its
//! rate is architecture-specific: differences are comparable, absolute values
//! and cross-machine comparisons are not.

/// Read the current tick counter.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_tsc_x86_64()
    }

    #[cfg(target_arch = "x86")]
    {
        read_tsc_x86()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cntvct_aarch64()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64; build with --features use_time")
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_tsc_x86_64() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    // LFENCE on both sides keeps the kernel's loads from drifting across RDTSC
    unsafe {
        _mm_lfence();
        let ticks = _rdtsc();
        _mm_lfence();
        ticks
    }
}

#[cfg(target_arch = "x86")]
#[inline(always)]
fn read_tsc_x86() -> u64 {
    use core::arch::x86::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        let ticks = _rdtsc();
        _mm_lfence();
        ticks
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cntvct_aarch64() -> u64 {
    // Fixed-frequency virtual counter, readable from EL0
    let ticks: u64;
    unsafe {
        core::arch::asm!("isb", "mrs {}, cntvct_el0", out(reg) ticks);
    }
    ticks
}
