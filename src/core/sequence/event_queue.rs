//=========================================================================
// Sequence Events
//=========================================================================
//
// Outbound notifications for the rendering layer.
//
// The controller pushes events as transitions happen. The owner drains
// the queue at tick boundaries and forwards them (directly, or across
// the player's event channel).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::catalog::SceneId;
use crate::core::reveal::RevealCursor;

//=== SequenceEvent =======================================================

/// Something the rendering layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    /// A scene became current and its reveal started.
    SceneEntered { index: usize, scene: SceneId },

    /// The visible text of the current scene changed.
    RevealProgress { scene: SceneId, cursor: RevealCursor },

    /// The current scene is fully revealed.
    RevealCompleted { scene: SceneId },

    /// Auto-advance will fire after `delay` unless pre-empted.
    AutoAdvanceArmed { scene: SceneId, delay: Duration },

    /// Terminal scene awaits `activate()`.
    ActivationArmed { scene: SceneId },

    /// Fade-out started.
    ExitStarted,

    /// Completion signal fired.
    Completed,

    /// Playback torn down before completion.
    Stopped,
}

//=== EventQueue ==========================================================

/// FIFO buffer of sequence events.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    queue: Vec<SequenceEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: SequenceEvent) {
        self.queue.push(event);
    }

    /// Takes all events, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SequenceEvent> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
