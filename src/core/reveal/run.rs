//=========================================================================
// Reveal Run
//=========================================================================
//
// One time-paced typewriter pass over a scene's lines.
//
// Timeline for lines L0..Ln:
//   [type L0][pause][type L1][pause] ... [type Ln][pause] → complete
//
// The run stores only its start time; every frame is computed lazily
// from the clock, so nothing has to tick it between polls. A run is
// owned by the controller and discarded on every scene change. Its
// completion is reported through `poll_complete()` at most once.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::RevealPacing;
use crate::core::catalog::SceneId;

//=== RevealToken =========================================================

/// Identity of one reveal run.
///
/// `generation` increases on every scene entry, so two runs never share a
/// token even if they reveal the same scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealToken {
    pub scene: SceneId,
    pub generation: u64,
}

//=== RevealCursor ========================================================

/// Position of the typewriter: line index and characters shown on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RevealCursor {
    pub line: usize,
    pub chars: usize,
}

//=== RevealFrame =========================================================

/// Visible text at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealFrame<'a> {
    lines: &'a [String],
    pub cursor: RevealCursor,
    pub finished: bool,
}

impl<'a> RevealFrame<'a> {
    /// Lines fully typed before the cursor line.
    pub fn completed_lines(&self) -> &'a [String] {
        &self.lines[..self.cursor.line.min(self.lines.len())]
    }

    /// The visible prefix of the cursor line.
    pub fn typing(&self) -> &'a str {
        let Some(line) = self.lines.get(self.cursor.line) else {
            return "";
        };
        match line.char_indices().nth(self.cursor.chars) {
            Some((byte, _)) => &line[..byte],
            None => line,
        }
    }

    /// All visible text, one entry per started line.
    pub fn visible_lines(&self) -> impl Iterator<Item = &'a str> {
        self.completed_lines()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.typing()))
    }
}

//=== RevealRun ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Skipped,
    Reported,
    Cancelled,
}

/// Cancellable handle to one scene's reveal.
#[derive(Debug, Clone)]
pub struct RevealRun {
    token: RevealToken,
    lines: Arc<[String]>,
    pacing: RevealPacing,
    started_at: Duration,
    state: RunState,
}

impl RevealRun {
    //--- Construction -----------------------------------------------------

    /// Starts a run at `started_at` on the owner's clock.
    ///
    /// A run without lines is finished from the start.
    pub fn start(
        token: RevealToken,
        lines: impl Into<Arc<[String]>>,
        pacing: RevealPacing,
        started_at: Duration,
    ) -> Self {
        let lines = lines.into();

        Self {
            token,
            lines,
            pacing,
            started_at,
            state: RunState::Running,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn token(&self) -> RevealToken {
        self.token
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn pacing(&self) -> RevealPacing {
        self.pacing
    }

    /// Time from start until completion is reported.
    pub fn total_duration(&self) -> Duration {
        self.lines.iter().fold(Duration::ZERO, |total, line| {
            total
                .saturating_add(self.pacing.typing_time(line.chars().count()))
                .saturating_add(self.pacing.line_pause)
        })
    }

    /// Clock time at which completion becomes due, ignoring `skip()`.
    pub fn ends_at(&self) -> Duration {
        self.started_at.saturating_add(self.total_duration())
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == RunState::Cancelled
    }

    /// Whether the run has reached its end at `now`.
    pub fn is_finished(&self, now: Duration) -> bool {
        match self.state {
            RunState::Running => now.saturating_sub(self.started_at) >= self.total_duration(),
            RunState::Skipped | RunState::Reported => true,
            RunState::Cancelled => false,
        }
    }

    /// Computes the visible text at `now`.
    pub fn frame(&self, now: Duration) -> RevealFrame<'_> {
        let cursor = match self.lines.last() {
            Some(text) => RevealCursor {
                line: self.lines.len() - 1,
                chars: text.chars().count(),
            },
            None => RevealCursor::default(),
        };
        let full = RevealFrame {
            lines: &self.lines,
            cursor,
            finished: true,
        };

        if self.is_finished(now) {
            return full;
        }

        let mut remaining = now.saturating_sub(self.started_at);

        for (line, text) in self.lines.iter().enumerate() {
            let len = text.chars().count();
            let typing = self.pacing.typing_time(len);

            if remaining < typing {
                let chars = (remaining.as_nanos() / self.pacing.char_delay.as_nanos()) as usize;
                return RevealFrame {
                    lines: &self.lines,
                    cursor: RevealCursor { line, chars },
                    finished: false,
                };
            }
            remaining -= typing;

            if remaining < self.pacing.line_pause {
                return RevealFrame {
                    lines: &self.lines,
                    cursor: RevealCursor { line, chars: len },
                    finished: false,
                };
            }
            remaining -= self.pacing.line_pause;
        }

        full
    }

    //--- Control ----------------------------------------------------------

    /// Reports completion exactly once.
    ///
    /// Returns true on the first poll at or after the end of the last
    /// line's pause (or after `skip()`), false otherwise and forever after.
    pub fn poll_complete(&mut self, now: Duration) -> bool {
        if self.state == RunState::Reported || !self.is_finished(now) {
            return false;
        }
        self.state = RunState::Reported;
        true
    }

    /// Fast-forwards to the fully revealed state.
    pub fn skip(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Skipped;
        }
    }

    /// Stops the run; it will never report completion.
    pub fn cancel(&mut self) {
        self.state = RunState::Cancelled;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn run(lines: &[&str]) -> RevealRun {
        let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        RevealRun::start(
            RevealToken { scene: SceneId(1), generation: 0 },
            lines,
            RevealPacing::new(ms(10), ms(100)),
            Duration::ZERO,
        )
    }

    //=====================================================================
    // Timing
    //=====================================================================

    #[test]
    fn total_duration_includes_every_pause() {
        // 3 chars + pause, 2 chars + pause
        assert_eq!(run(&["abc", "de"]).total_duration(), ms(30 + 100 + 20 + 100));
    }

    #[test]
    fn frame_types_first_line_progressively() {
        let run = run(&["abc", "de"]);

        let frame = run.frame(ms(0));
        assert_eq!(frame.cursor, RevealCursor { line: 0, chars: 0 });
        assert_eq!(frame.typing(), "");

        let frame = run.frame(ms(25));
        assert_eq!(frame.cursor, RevealCursor { line: 0, chars: 2 });
        assert_eq!(frame.typing(), "ab");
        assert!(frame.completed_lines().is_empty());
        assert!(!frame.finished);
    }

    #[test]
    fn frame_holds_full_line_during_pause() {
        let run = run(&["abc", "de"]);
        let frame = run.frame(ms(80));
        assert_eq!(frame.cursor, RevealCursor { line: 0, chars: 3 });
        assert_eq!(frame.typing(), "abc");
    }

    #[test]
    fn frame_moves_to_second_line_after_pause() {
        let run = run(&["abc", "de"]);
        let frame = run.frame(ms(140));

        assert_eq!(frame.cursor, RevealCursor { line: 1, chars: 1 });
        assert_eq!(frame.visible_lines().collect::<Vec<_>>(), vec!["abc", "d"]);
    }

    #[test]
    fn frame_respects_char_boundaries() {
        let run = run(&["é…ü"]);
        assert_eq!(run.frame(ms(20)).typing(), "é…");
    }

    #[test]
    fn frame_is_full_once_finished() {
        let run = run(&["abc", "de"]);
        let frame = run.frame(ms(250));
        assert!(frame.finished);
        assert_eq!(frame.visible_lines().collect::<Vec<_>>(), vec!["abc", "de"]);
    }

    //=====================================================================
    // Completion Reporting
    //=====================================================================

    #[test]
    fn completion_waits_for_last_pause() {
        let mut run = run(&["abc", "de"]);

        // Last line typed at 250 - 100 = 150ms, pause still running.
        assert!(!run.poll_complete(ms(150)));
        assert!(!run.poll_complete(ms(249)));
        assert!(run.poll_complete(ms(250)));
    }

    #[test]
    fn completion_reported_exactly_once() {
        let mut run = run(&["a"]);
        assert!(run.poll_complete(ms(500)));
        assert!(!run.poll_complete(ms(600)));
        assert!(run.is_finished(ms(600)));
    }

    #[test]
    fn skip_completes_on_next_poll() {
        let mut run = run(&["abcdef"]);
        run.skip();

        assert!(run.frame(ms(0)).finished);
        assert!(run.poll_complete(ms(0)));
        assert!(!run.poll_complete(ms(0)));
    }

    #[test]
    fn cancelled_run_never_completes() {
        let mut run = run(&["a"]);
        run.cancel();

        assert!(run.is_cancelled());
        assert!(!run.poll_complete(ms(10_000)));
        assert!(!run.is_finished(ms(10_000)));

        run.skip();
        assert!(!run.poll_complete(ms(10_000)));
    }

    #[test]
    fn instant_pacing_completes_immediately() {
        let mut run = RevealRun::start(
            RevealToken { scene: SceneId(2), generation: 4 },
            vec!["hello".to_string()],
            RevealPacing::instant(),
            ms(30),
        );

        assert!(run.frame(ms(30)).finished);
        assert!(run.poll_complete(ms(30)));
        assert_eq!(run.token().generation, 4);
    }

    //=====================================================================
    // Degenerate Input
    //=====================================================================

    #[test]
    fn empty_run_is_finished_immediately() {
        let mut run = run(&[]);
        let frame = run.frame(Duration::ZERO);

        assert!(frame.finished);
        assert!(frame.completed_lines().is_empty());
        assert_eq!(frame.typing(), "");
        assert_eq!(run.total_duration(), Duration::ZERO);
        assert!(run.poll_complete(Duration::ZERO));
    }

    #[test]
    fn huge_pacing_saturates_instead_of_overflowing() {
        let run = RevealRun::start(
            RevealToken { scene: SceneId(1), generation: 0 },
            vec!["abc".to_string(), "de".to_string()],
            RevealPacing::new(ms(10), Duration::MAX),
            ms(1),
        );

        assert_eq!(run.total_duration(), Duration::MAX);
        assert_eq!(run.ends_at(), Duration::MAX);
        assert!(!run.is_finished(ms(60_000)));
        assert_eq!(run.frame(ms(31)).cursor, RevealCursor { line: 0, chars: 3 });
    }
}
