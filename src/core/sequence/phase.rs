//=========================================================================
// Playback Phase & Trigger Outcomes
//=========================================================================

//=== Phase ===============================================================

/// Where the sequence is in its lifecycle.
///
/// ```text
///   Presenting(i) ──reveal done──> AwaitingAdvance(i)
///        ↑                              │ timer / manual (i < last)
///        └──────────── i + 1 ───────────┘
///
///   AwaitingAdvance(last) ──activate──> Exiting ──exit delay──> Done
///
///   any non-Done phase ──stop──> Stopped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Scene `i`'s text is being revealed.
    Presenting(usize),

    /// Scene `i` is fully revealed; auto-advance or activation is armed.
    AwaitingAdvance(usize),

    /// Terminal fade-out in progress.
    Exiting,

    /// Sequence complete; the completion signal has fired.
    Done,

    /// Torn down before completion.
    Stopped,
}

impl Phase {
    /// Whether no further transition can occur.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Done | Self::Stopped)
    }

    /// Scene index for the per-scene phases.
    pub fn scene_index(&self) -> Option<usize> {
        match self {
            Self::Presenting(i) | Self::AwaitingAdvance(i) => Some(*i),
            _ => None,
        }
    }
}

//=== TriggerOutcome ======================================================

/// Result of delivering a trigger to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The trigger caused a transition.
    Applied,

    /// The trigger was ignored; state is unchanged.
    Discarded(DiscardReason),
}

impl TriggerOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why a trigger was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardReason {
    /// Refers to a scene or run that has already been superseded.
    LateCallback,

    /// Not valid in the current phase.
    WrongPhase,

    /// Manual advance on the terminal scene.
    TerminalScene,

    /// The sequence is done or stopped.
    Finished,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_phases() {
        assert!(Phase::Done.is_final());
        assert!(Phase::Stopped.is_final());
        assert!(!Phase::Exiting.is_final());
        assert!(!Phase::Presenting(0).is_final());
    }

    #[test]
    fn scene_index_only_for_scene_phases() {
        assert_eq!(Phase::Presenting(2).scene_index(), Some(2));
        assert_eq!(Phase::AwaitingAdvance(1).scene_index(), Some(1));
        assert_eq!(Phase::Exiting.scene_index(), None);
        assert_eq!(Phase::Done.scene_index(), None);
    }

    #[test]
    fn outcome_helpers() {
        assert!(TriggerOutcome::Applied.is_applied());
        assert!(!TriggerOutcome::Discarded(DiscardReason::WrongPhase).is_applied());
    }
}
