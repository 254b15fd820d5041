//=========================================================================
// Sequence Player
//
// Threaded runtime for one narrative sequence.
//
// Architecture:
// ```text
//     PlayerBuilder  ──build()──>  Player  ──spawn()──>  PlayerHandle
//         │                          │                      │
//         ├─ with_tps()              └─ spawns logic        ├─ send() / activate() ...
//         ├─ with_channel_capacity()    thread              ├─ events()
//         ├─ with_config()                                  └─ join()
//         └─ with_clock()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io;
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{error, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::catalog::{SceneCatalog, SceneId};
use crate::core::clock::{Clock, SystemClock};
use crate::core::sequence::{SequenceConfig, SequenceController, SequenceEvent};
use crate::core::trigger_bridge::PlayerCommand;
use crate::core::SequenceOrchestrator;

//=== PlayerError =========================================================

/// Runtime failures of the threaded player.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The OS refused to start the logic thread.
    #[error("failed to spawn logic thread: {0}")]
    Spawn(#[from] io::Error),

    /// The logic thread panicked.
    #[error("logic thread panicked")]
    LogicThreadPanicked,
}

//=== PlayerBuilder =======================================================

/// Builder for configuring and constructing a [`Player`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic ticks per second)
/// - **Channel capacity**: 128 commands
/// - **Config**: [`SequenceConfig::default`]
/// - **Clock**: [`SystemClock`]
///
/// # Examples
///
/// ```no_run
/// use aetheric_sequencer::prelude::*;
///
/// let catalog = SceneCatalog::builtin().unwrap();
///
/// let handle = PlayerBuilder::new()
///     .with_tps(120.0)
///     .build()
///     .spawn(catalog, || println!("intro finished"))
///     .unwrap();
///
/// for event in handle.events().iter() {
///     if let SequenceEvent::ActivationArmed { .. } = event {
///         handle.activate();
///         break;
///     }
/// }
///
/// handle.join().unwrap();
/// ```
pub struct PlayerBuilder {
    tps: f64,
    channel_capacity: usize,
    config: SequenceConfig,
    clock: Option<Arc<dyn Clock>>,
}

impl PlayerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: SequenceConfig::default(),
            clock: None,
        }
    }

    /// Sets the logic thread's tick rate.
    ///
    /// Timer resolution is one tick: an auto-advance fires on the first
    /// tick at or after its deadline.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the UI → logic command channel.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets playback timing and policy.
    pub fn with_config(mut self, config: SequenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the system clock (e.g. with a `ManualClock`).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the player.
    pub fn build(self) -> Player {
        info!("Building player (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Player {
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            config: self.config,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
        }
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Player ==============================================================

/// Configured, not-yet-running player.
///
/// # Architecture
///
/// ```text
/// UI Thread                          Logic Thread (@ TPS)
///   PlayerHandle ── PlayerCommand ──►  CommandCollector
///        ▲                                  ↓
///        │                            SequenceController
///        └──────── SequenceEvent ◄──────────┘
/// ```
pub struct Player {
    tps: f64,
    channel_capacity: usize,
    config: SequenceConfig,
    clock: Arc<dyn Clock>,
}

impl Player {
    /// Starts playing `catalog` on a new logic thread.
    ///
    /// `on_complete` runs on the logic thread, at most once, when the
    /// sequence reaches `Done`.
    pub fn spawn<F>(self, catalog: SceneCatalog, on_complete: F) -> Result<PlayerHandle, PlayerError>
    where
        F: FnOnce() + Send + 'static,
    {
        info!("Starting player (TPS: {})", self.tps);

        let (command_tx, command_rx): (Sender<PlayerCommand>, Receiver<PlayerCommand>) =
            bounded(self.channel_capacity);
        let (event_tx, event_rx) = unbounded();

        let controller = SequenceController::new(catalog, self.config, self.clock, on_complete);
        let thread = SequenceOrchestrator::new(controller, event_tx)
            .spawn_logic_thread(command_rx, self.tps)?;

        info!("Logic thread spawned");

        Ok(PlayerHandle {
            commands: command_tx,
            events: event_rx,
            thread,
        })
    }
}

//=== PlayerHandle ========================================================

/// UI-side handle to a running player.
///
/// Dropping the handle disconnects the command channel, which tears the
/// sequence down without invoking the completion signal.
pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<SequenceEvent>,
    thread: JoinHandle<()>,
}

impl PlayerHandle {
    //--- Commands ---------------------------------------------------------

    /// Sends a command to the logic thread.
    ///
    /// Returns false if the logic thread has already exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        match self.commands.send(command) {
            Ok(()) => true,
            Err(_) => {
                warn!("Dropped {:?}: logic thread has exited", command);
                false
            }
        }
    }

    pub fn reveal_completed(&self, scene: SceneId) -> bool {
        self.send(PlayerCommand::RevealCompleted(scene))
    }

    pub fn skip_reveal(&self) -> bool {
        self.send(PlayerCommand::SkipReveal)
    }

    pub fn manual_advance(&self) -> bool {
        self.send(PlayerCommand::ManualAdvance)
    }

    pub fn activate(&self) -> bool {
        self.send(PlayerCommand::Activate)
    }

    pub fn stop(&self) -> bool {
        self.send(PlayerCommand::Stop)
    }

    //--- Events -----------------------------------------------------------

    /// Stream of sequence events for the rendering layer.
    pub fn events(&self) -> &Receiver<SequenceEvent> {
        &self.events
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    //--- Shutdown ---------------------------------------------------------

    /// Waits for the logic thread to exit.
    ///
    /// Does not stop playback; send [`PlayerCommand::Stop`] first to
    /// abandon a sequence that has not completed.
    pub fn join(self) -> Result<(), PlayerError> {
        match self.thread.join() {
            Ok(()) => {
                info!("Logic thread terminated cleanly");
                Ok(())
            }
            Err(e) => {
                error!("Logic thread panicked: {:?}", e);
                Err(PlayerError::LogicThreadPanicked)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
