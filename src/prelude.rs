//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_sequencer::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::player::{Player, PlayerBuilder, PlayerError, PlayerHandle};

// Scene catalog
pub use crate::core::catalog::{CatalogError, Foreground, Scene, SceneCatalog, SceneId};

// Clock & timers
pub use crate::core::clock::{Clock, ManualClock, Scheduler, SystemClock, TimerHandle};

// Text reveal
pub use crate::core::reveal::{RevealFrame, RevealPacing, RevealRun};

// Playback state machine
pub use crate::core::sequence::{
    DiscardReason, Phase, SequenceConfig, SequenceController, SequenceEvent, TriggerOutcome,
};

// Trigger bridge
pub use crate::core::trigger_bridge::PlayerCommand;
