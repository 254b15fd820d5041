//=========================================================================
// Text Reveal Engine
//=========================================================================
//
// Typewriter-style, time-paced reveal of a scene's lines.
//
// Architecture:
//   RevealRun::start(token, lines, pacing, now)
//     ├─ frame(now)          → RevealFrame (lazy character stream)
//     ├─ poll_complete(now)  → true exactly once, after last pause
//     ├─ skip()              → fast-forward
//     └─ cancel()            → never completes
//
// The engine never advances scenes. It only reports that the last line
// (and its pause) has been shown; the controller decides what follows.
//
//=========================================================================

//=== Module Declarations =================================================

mod pacing;
mod run;

//=== Public API ==========================================================

pub use pacing::RevealPacing;
pub use run::{RevealCursor, RevealFrame, RevealRun, RevealToken};
