//=========================================================================
// Sequence Configuration
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::reveal::RevealPacing;

//=== SequenceConfig ======================================================

/// Playback timing and policy.
///
/// # Default Values
///
/// - **auto_advance_delay**: 5000 ms after a non-terminal scene is revealed
/// - **exit_delay**: 1000 ms fade between activation and completion
/// - **pacing**: [`RevealPacing::default`]
/// - **activate_during_reveal**: false
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use aetheric_sequencer::prelude::*;
///
/// let config = SequenceConfig::default()
///     .with_auto_advance_delay(Duration::from_secs(3))
///     .with_pacing(RevealPacing::instant());
///
/// assert_eq!(config.auto_advance_delay, Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Delay between a non-terminal scene's full reveal and the next scene.
    pub auto_advance_delay: Duration,

    /// Delay between activation on the terminal scene and completion.
    pub exit_delay: Duration,

    /// Typewriter timing for every scene.
    pub pacing: RevealPacing,

    /// Accept `activate()` while the terminal scene is still typing.
    pub activate_during_reveal: bool,
}

impl SequenceConfig {
    pub const DEFAULT_AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(5000);
    pub const DEFAULT_EXIT_DELAY: Duration = Duration::from_millis(1000);

    pub fn with_auto_advance_delay(mut self, delay: Duration) -> Self {
        self.auto_advance_delay = delay;
        self
    }

    pub fn with_exit_delay(mut self, delay: Duration) -> Self {
        self.exit_delay = delay;
        self
    }

    pub fn with_pacing(mut self, pacing: RevealPacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_activate_during_reveal(mut self, enabled: bool) -> Self {
        self.activate_during_reveal = enabled;
        self
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            auto_advance_delay: Self::DEFAULT_AUTO_ADVANCE_DELAY,
            exit_delay: Self::DEFAULT_EXIT_DELAY,
            pacing: RevealPacing::default(),
            activate_during_reveal: false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
