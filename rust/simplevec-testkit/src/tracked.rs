//! Instance-counting element type.
//!
//! Counters are thread-local, so every test (which the test harness runs on
//! its own thread) observes only the instances it created.

use std::cell::Cell;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static CLONES: Cell<usize> = const { Cell::new(0) };
}

/// A value wrapper that increments a live counter on construction and
/// decrements it on drop.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked(pub i64);

impl Tracked {
    pub fn new(value: i64) -> Tracked {
        LIVE.with(|c| c.set(c.get() + 1));
        Tracked(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Tracked::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        CLONES.with(|c| c.set(c.get() + 1));
        Tracked::new(self.0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get() - 1));
    }
}

/// Number of `Tracked` values currently alive on this thread.
pub fn live_count() -> isize {
    LIVE.with(|c| c.get())
}

/// Number of `Tracked::clone` calls made on this thread.
pub fn clone_count() -> usize {
    CLONES.with(|c| c.get())
}

/// Snapshot of the thread's counters, used to measure a scope.
pub struct LiveGuard {
    live: isize,
    clones: usize,
}

impl LiveGuard {
    pub fn new() -> LiveGuard {
        LiveGuard {
            live: live_count(),
            clones: clone_count(),
        }
    }

    /// Live instances created since the guard and not yet dropped.
    pub fn live(&self) -> isize {
        live_count() - self.live
    }

    /// Clones made since the guard.
    pub fn clones(&self) -> usize {
        clone_count() - self.clones
    }

    /// Panics if any instance created since the guard is still alive, or if
    /// one was dropped twice.
    pub fn assert_balanced(&self) {
        assert_eq!(self.live(), 0, "unbalanced Tracked construction/drop");
    }
}

impl Default for LiveGuard {
    fn default() -> Self {
        LiveGuard::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_counting() {
        let guard = LiveGuard::new();
        let a = Tracked::new(1);
        let b = a.clone();
        assert_eq!(guard.live(), 2);
        assert_eq!(guard.clones(), 1);
        drop(a);
        drop(b);
        guard.assert_balanced();
    }

    #[test]
    fn test_default_is_counted() {
        let guard = LiveGuard::new();
        let v: Vec<Tracked> = (0..4).map(|_| Tracked::default()).collect();
        assert_eq!(guard.live(), 4);
        assert!(v.iter().all(|t| t.value() == 0));
        drop(v);
        guard.assert_balanced();
    }
}
