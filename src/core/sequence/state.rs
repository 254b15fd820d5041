//=========================================================================
// Playback State
//=========================================================================
//
// The controller's single owned state record.
//
// The pending timer slot holds at most one handle. The only way to arm a
// timer is `replace_timer()`, which cancels whatever the slot held first,
// so a superseded auto-advance or exit fade can never fire.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::Phase;
use crate::core::clock::{Scheduler, TimerHandle};

//=== TimerEvent ==========================================================

/// Payloads the controller schedules on its clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerEvent {
    /// Move from scene `from` to `from + 1`.
    AutoAdvance { from: usize },

    /// End the exit fade and complete the sequence.
    ExitFade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingTimer {
    pub handle: TimerHandle,
    pub event: TimerEvent,
}

//=== PlaybackState =======================================================

#[derive(Debug)]
pub(crate) struct PlaybackState {
    pub current_index: usize,
    pub reveal_complete: bool,
    pub phase: Phase,
    pending: Option<PendingTimer>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            reveal_complete: false,
            phase: Phase::Presenting(0),
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    //--- Timer Slot -------------------------------------------------------

    /// Cancels the current timer (if any), then arms `event` after `delay`.
    pub fn replace_timer(
        &mut self,
        timers: &mut Scheduler<TimerEvent>,
        delay: Duration,
        event: TimerEvent,
    ) -> TimerHandle {
        self.clear_timer(timers);

        let handle = timers.schedule(delay, event);
        debug!("Armed {:?} as {} (delay {:?})", event, handle, delay);

        self.pending = Some(PendingTimer { handle, event });
        handle
    }

    /// Cancels the current timer, if any.
    pub fn clear_timer(&mut self, timers: &mut Scheduler<TimerEvent>) {
        if let Some(pending) = self.pending.take() {
            if timers.cancel(pending.handle) {
                debug!("Cancelled {:?} ({})", pending.event, pending.handle);
            }
        }
    }

    /// Claims a fired timer.
    ///
    /// Returns true and empties the slot if `handle` is the one armed.
    /// Anything else is a superseded timer.
    pub fn claim_fired(&mut self, handle: TimerHandle) -> bool {
        match self.pending {
            Some(pending) if pending.handle == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
