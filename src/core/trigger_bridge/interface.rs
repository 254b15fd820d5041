//=========================================================================
// Trigger Bridge Interface
//=========================================================================
//
// UI-to-logic contract: the only messages that cross into the logic
// thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::catalog::SceneId;

//=== PlayerCommand =======================================================

/// Triggers sent from the UI layer to the logic thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// An external typewriter finished revealing `SceneId`.
    RevealCompleted(SceneId),

    /// Fast-forward the current reveal.
    SkipReveal,

    /// Advance now instead of waiting for the timer.
    ManualAdvance,

    /// User activation on the terminal scene.
    Activate,

    /// Tear down playback.
    Stop,
}
