//=========================================================================
// Clock & Timer Service
//=========================================================================
//
// Time sources and the cancellable scheduler used for auto-advance and
// exit delays.
//
// Architecture:
//   Clock (System / Manual) ──now()──> Scheduler<T>
//                                         ├─ schedule() → TimerHandle
//                                         ├─ cancel()
//                                         └─ pop_due()
//
//=========================================================================

//=== Module Declarations =================================================

mod scheduler;
mod time_source;

//=== Public API ==========================================================

pub use scheduler::{Scheduler, TimerHandle};
pub use time_source::{Clock, ManualClock, SystemClock};
