//=========================================================================
// Scheduler
//=========================================================================
//
// Delayed, cancellable delivery of typed payloads.
//
// Architecture:
//   owner → schedule(delay, T) → BTreeMap<TimerHandle, Entry<T>>
//                                        ↓
//   owner ← pop_due() (one at a time, deadline order) at tick boundary
//
// Payloads are plain values, not closures. The owner interprets them at
// its own tick boundary, so no callback ever runs against state it did
// not expect. `cancel()` removes the entry outright: a cancelled handle
// can never be returned by `pop_due()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::Clock;

//=== TimerHandle =========================================================

/// Identifies one scheduled payload.
///
/// Handles are never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

//=== Scheduler ===========================================================

struct Entry<T> {
    deadline: Duration,
    payload: T,
}

/// Single-owner timer service.
pub struct Scheduler<T> {
    clock: Arc<dyn Clock>,
    entries: BTreeMap<TimerHandle, Entry<T>>,
    next_id: u64,
}

impl<T> Scheduler<T> {
    //--- Construction -----------------------------------------------------

    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Current time on the scheduler's clock.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    //--- Scheduling -------------------------------------------------------

    /// Schedules `payload` to become due after `delay`.
    ///
    /// Deadlines saturate at `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let deadline = self.clock.now().saturating_add(delay);
        self.entries.insert(handle, Entry { deadline, payload });
        handle
    }

    /// Cancels a pending payload.
    ///
    /// Returns false if the handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.entries.remove(&handle).is_some()
    }

    /// Cancels everything still pending.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    //--- Delivery ---------------------------------------------------------

    /// Removes and returns the earliest due payload, if any.
    ///
    /// Ties on deadline resolve in scheduling order. Callers drain in a
    /// loop so that cancellations made while handling one payload take
    /// effect before the next is delivered.
    pub fn pop_due(&mut self) -> Option<(TimerHandle, T)> {
        let now = self.clock.now();

        let handle = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(handle, entry)| (entry.deadline, **handle))
            .map(|(handle, _)| *handle)?;

        self.entries
            .remove(&handle)
            .map(|entry| (handle, entry.payload))
    }

    //--- Query API --------------------------------------------------------

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.values().map(|entry| entry.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
