//=========================================================================
// Reveal Pacing
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== RevealPacing ========================================================

/// Timing for a typewriter reveal.
///
/// # Default Values
///
/// - **char_delay**: 50 ms per character
/// - **line_pause**: 1000 ms after each line, including the last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPacing {
    pub char_delay: Duration,
    pub line_pause: Duration,
}

impl RevealPacing {
    pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(50);
    pub const DEFAULT_LINE_PAUSE: Duration = Duration::from_millis(1000);

    pub const fn new(char_delay: Duration, line_pause: Duration) -> Self {
        Self {
            char_delay,
            line_pause,
        }
    }

    /// Pacing with no delays: every run completes on its first poll.
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Time to type one line of `chars` characters, excluding the pause.
    pub(crate) fn typing_time(&self, chars: usize) -> Duration {
        self.char_delay
            .saturating_mul(u32::try_from(chars).unwrap_or(u32::MAX))
    }
}

impl Default for RevealPacing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHAR_DELAY, Self::DEFAULT_LINE_PAUSE)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_typewriter_timing() {
        let pacing = RevealPacing::default();
        assert_eq!(pacing.char_delay, Duration::from_millis(50));
        assert_eq!(pacing.line_pause, Duration::from_millis(1000));
    }

    #[test]
    fn typing_time_scales_with_length() {
        let pacing = RevealPacing::default();
        assert_eq!(pacing.typing_time(0), Duration::ZERO);
        assert_eq!(pacing.typing_time(10), Duration::from_millis(500));
    }

    #[test]
    fn instant_pacing_has_no_delay() {
        let pacing = RevealPacing::instant();
        assert_eq!(pacing.typing_time(1_000), Duration::ZERO);
        assert_eq!(pacing.line_pause, Duration::ZERO);
    }
}
