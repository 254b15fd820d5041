//=========================================================================
// Trigger Bridge
//=========================================================================
//
// Bridges the UI layer with the logic thread.
//
// Components:
// - `interface`: Command types (the contract)
// - `command_collector`: Logic-side command intake per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod command_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use command_collector::{CommandCollector, TickControl};
pub use interface::PlayerCommand;
