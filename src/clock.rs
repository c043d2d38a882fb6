//! Monotonic microsecond time source

use serde::{Deserialize, Serialize};

/// A point in time, in microseconds since an arbitrary epoch
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Instant(pub u64);

impl Instant {
    /// Microseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates at zero if `earlier` is later than `self`.
    pub fn duration_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Elapsed microseconds between two clock readings
///
/// `end - start`. Counter wraparound within a run is not handled.
pub fn elapsed(start: Instant, end: Instant) -> u64 {
    end.duration_since(start)
}

/// Monotonic time source
///
/// Successive readings are non-decreasing. Reading never blocks or fails.
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (*self).now()
    }
}

/// Clock backed by a closure returning raw microsecond ticks
///
/// Binds a hardware counter (e.g. the RP2040 64 bit timer) to [`Clock`].
///
/// ```
/// # use mcubench::{Clock, FnClock, Instant};
/// let c = FnClock(|| 42);
/// assert_eq!(c.now(), Instant(42));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct FnClock<F>(pub F);

impl<F: Fn() -> u64> Clock for FnClock<F> {
    fn now(&self) -> Instant {
        Instant((self.0)())
    }
}

/// Host clock based on [`std::time::Instant`]
#[cfg(any(test, feature = "std"))]
#[derive(Copy, Clone, Debug)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(any(test, feature = "std"))]
impl Default for StdClock {
    fn default() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl Clock for StdClock {
    fn now(&self) -> Instant {
        Instant(self.epoch.elapsed().as_micros() as u64)
    }
}
