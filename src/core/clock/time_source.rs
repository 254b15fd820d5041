//=========================================================================
// Time Sources
//=========================================================================
//
// Monotonic clocks expressed as elapsed time since an origin.
//
// `SystemClock` backs the threaded player. `ManualClock` is advanced by
// hand and drives deterministic playback in tests and offline tools.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

//=== Clock Trait =========================================================

/// Monotonic time source.
///
/// `now()` must never go backwards.
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

//=== SystemClock =========================================================

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

//=== ManualClock =========================================================

/// Hand-advanced clock.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the controller.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }

    /// Moves time forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
