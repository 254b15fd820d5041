//=========================================================================
// Aetheric Sequencer — Library Root
//
// This crate plays a linear, timed narrative sequence: an ordered list of
// scenes whose text is typed out, then auto-advanced or, on the last
// scene, held until the user activates completion.
//
// Responsibilities:
// - Expose the playback state machine (`SequenceController`)
// - Expose the threaded runtime facade (`PlayerBuilder` / `PlayerHandle`)
// - Keep rendering out of the core: scenes, frames and events are data
//
// Typical usage:
// ```no_run
// use aetheric_sequencer::prelude::*;
//
// let catalog = SceneCatalog::builtin().unwrap();
// let handle = PlayerBuilder::new().build().spawn(catalog, || {}).unwrap();
// handle.join().unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains every playback subsystem (catalog, clock, reveal,
// sequence, trigger bridge). It is public so hosts that run their own
// loop can drive a `SequenceController` directly.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `player` defines the threaded runtime entry point.
//
mod player;

//--- Public Exports ------------------------------------------------------

pub use player::{Player, PlayerBuilder, PlayerError, PlayerHandle};
