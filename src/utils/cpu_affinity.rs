//! Pinning of the driver thread while a repetition is timed.
//!
//! Both timestamps of a repetition must come from the same core's counter,
//! so the driver pins itself to the core it is running on and restores its
//! previous affinity afterwards.
//!
//! A thread inherits its creator's affinity, so workers spawned while the
//! driver is pinned would all land on the driver's core. Spawn sites take a
//! [`WorkerAffinity`] on the driver and apply it first thing on each worker,
//! which puts the worker back on the mask the driver had before pinning.
//!
//! Linux uses `sched_setaffinity` through libc; other platforms are no-ops.

use std::cell::Cell;

#[cfg(target_os = "linux")]
mod platform {
    pub type Mask = libc::cpu_set_t;

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    /// Pin to `core_id`, returning the mask to restore later.
    pub fn pin(core_id: usize) -> Option<Mask> {
        unsafe {
            let mut saved: Mask = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<Mask>(), &mut saved) != 0 {
                return None;
            }

            let mut set: Mask = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<Mask>(), &set) != 0 {
                return None;
            }
            Some(saved)
        }
    }

    pub fn restore(saved: &Mask) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<Mask>(), saved) == 0 }
    }

    pub fn allowed_cpus() -> Option<usize> {
        unsafe {
            let mut set: Mask = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<Mask>(), &mut set) != 0 {
                return None;
            }
            Some(libc::CPU_COUNT(&set) as usize)
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Mask = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn pin(_core_id: usize) -> Option<Mask> {
        None
    }
    pub fn restore(_saved: &Mask) -> bool {
        true
    }
    pub fn allowed_cpus() -> Option<usize> {
        None
    }
}

thread_local! {
    // Mask this thread had before its outermost live `CorePin`
    static UNPINNED: Cell<Option<platform::Mask>> = const { Cell::new(None) };
}

/// Number of CPUs the calling thread may run on, if the platform reports it.
pub fn allowed_cpus() -> Option<usize> {
    platform::allowed_cpus()
}

/// RAII guard: pins the calling thread to its current core, unpins on drop.
///
/// The guard holds the affinity mask it replaced, so nested guards unwind
/// in order.
pub struct CorePin {
    pinned: Option<(usize, platform::Mask)>,
    outermost: bool,
    // affinity is per-thread; the guard must be dropped where it was created
    _not_send: std::marker::PhantomData<*const ()>,
}

impl CorePin {
    pub fn current() -> Self {
        let pinned = platform::current_cpu()
            .and_then(|cpu| platform::pin(cpu).map(|saved| (cpu, saved)));
        let mut outermost = false;
        match &pinned {
            Some((_, saved)) => UNPINNED.with(|unpinned| {
                if unpinned.get().is_none() {
                    unpinned.set(Some(*saved));
                    outermost = true;
                }
            }),
            None => log::trace!("driver thread left unpinned"),
        }
        Self {
            pinned,
            outermost,
            _not_send: std::marker::PhantomData,
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned.as_ref().map(|(core, _)| *core)
    }
}

impl Drop for CorePin {
    fn drop(&mut self) {
        if let Some((_, saved)) = &self.pinned {
            if !platform::restore(saved) {
                log::debug!("failed to restore driver thread affinity");
            }
        }
        if self.outermost {
            UNPINNED.with(|unpinned| unpinned.set(None));
        }
    }
}

/// Affinity for threads spawned by the current thread.
///
/// Captured on the spawning thread, applied on the spawned one. Empty when
/// the spawning thread is not pinned, in which case the inherited mask is
/// already the right one.
#[derive(Clone, Copy)]
pub struct WorkerAffinity(Option<platform::Mask>);

impl WorkerAffinity {
    pub fn inherit() -> Self {
        Self(UNPINNED.with(|unpinned| unpinned.get()))
    }

    /// Call on the new thread before it does any work.
    pub fn apply(&self) {
        if let Some(mask) = &self.0 {
            if !platform::restore(mask) {
                log::debug!("failed to release worker thread from driver core");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard_round_trip() {
        let guard = CorePin::current();
        if let Some(core) = guard.core_id() {
            #[cfg(target_os = "linux")]
            assert_eq!(platform::current_cpu(), Some(core));
            let _ = core;
        }
        drop(guard);
    }

    #[test]
    fn test_nested_pins_restore() {
        let before = allowed_cpus();
        let outer = CorePin::current();
        {
            let _inner = CorePin::current();
        }
        drop(outer);
        assert_eq!(allowed_cpus(), before);
    }

    #[test]
    fn test_pin_narrows_to_one_cpu() {
        let guard = CorePin::current();
        if guard.core_id().is_some() {
            assert_eq!(allowed_cpus(), Some(1));
        }
    }

    #[test]
    fn test_spawned_thread_gets_unpinned_mask() {
        let unpinned = allowed_cpus();
        let _guard = CorePin::current();
        let affinity = WorkerAffinity::inherit();

        let seen = std::thread::spawn(move || {
            affinity.apply();
            allowed_cpus()
        })
        .join()
        .unwrap();
        assert_eq!(seen, unpinned);
    }

    #[test]
    fn test_affinity_is_empty_when_not_pinned() {
        assert!(WorkerAffinity::inherit().0.is_none());
    }
}
