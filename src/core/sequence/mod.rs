//=========================================================================
// Sequence System
//=========================================================================
//
// Playback state machine for a linear, timed narrative sequence.
//
// Architecture:
//   SequenceController
//     ├─ catalog: SceneCatalog
//     ├─ state: PlaybackState (index, reveal flag, phase, timer slot)
//     ├─ reveal: Option<RevealRun>
//     ├─ timers: Scheduler<TimerEvent>
//     └─ events: EventQueue → rendering layer
//
// Flow:
//   triggers / update() → transition → events
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod controller;
mod event_queue;
mod phase;
mod state;

//=== Public API ==========================================================

pub use config::SequenceConfig;
pub use controller::{CompletionSignal, SequenceController};
pub(crate) use event_queue::EventQueue;
pub use event_queue::SequenceEvent;
pub use phase::{DiscardReason, Phase, TriggerOutcome};
