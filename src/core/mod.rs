//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for sequence playback on the logic thread.
//
// Responsibilities:
// - Own the SequenceController for one run
// - Receive UI commands via the trigger bridge (crossbeam channel)
// - Tick the controller at a fixed rate (TPS)
// - Forward SequenceEvents to the rendering layer
//
// Notes:
// The controller is owned by exactly one thread, so no locking guards
// playback state. Communication with the UI occurs only through message
// passing. Whatever ends the loop (Done, Stop, or the UI dropping its
// sender) leaves no timer or reveal run behind.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::io;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};

//=== Public Modules ======================================================

pub mod catalog;
pub mod clock;
pub mod reveal;
pub mod sequence;
pub mod trigger_bridge;

//=== Internal Modules ====================================================

use sequence::{SequenceController, SequenceEvent};
use trigger_bridge::{CommandCollector, PlayerCommand, TickControl};

//=== SequenceOrchestrator ================================================
//
// Owns the controller and the outbound event channel until the logic
// thread is spawned.
//
pub(crate) struct SequenceOrchestrator {
    controller: SequenceController,
    events: Sender<SequenceEvent>,
}

impl SequenceOrchestrator {
    //--- Construction -----------------------------------------------------

    pub fn new(controller: SequenceController, events: Sender<SequenceEvent>) -> Self {
        Self { controller, events }
    }

    //--- spawn_logic_thread() --------------------------------------------
    //
    // Spawns the logic thread that ticks the controller at a fixed rate.
    //
    // Each tick:
    //  1. Collects UI commands (waits up to one frame for the first)
    //  2. Applies them to the controller in arrival order
    //  3. Runs the controller's tick boundary (reveal + timers)
    //  4. Forwards emitted events
    //  5. Exits once the sequence is Done or Stopped
    //
    pub fn spawn_logic_thread(
        self,
        receiver: Receiver<PlayerCommand>,
        tps: f64,
    ) -> io::Result<thread::JoinHandle<()>> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::Builder::new()
            .name("sequence-logic".into())
            .spawn(move || self.run(receiver, frame_duration))
    }

    fn run(mut self, receiver: Receiver<PlayerCommand>, frame_duration: Duration) {
        let mut collector = CommandCollector::new(receiver);

        // Publish the initial SceneEntered before anything else.
        self.forward_events();

        loop {
            let frame_start = Instant::now();

            //--- Step 1 + 2: Gather and apply commands ----------------------
            let control = collector.collect_frame(frame_duration);
            for command in collector.take_commands() {
                self.apply(command);
            }

            if control == TickControl::Exit {
                debug!("Command channel disconnected, tearing down");
                self.controller.stop();
            }

            //--- Step 3: Tick boundary -------------------------------------
            self.controller.update();

            //--- Step 4: Publish -------------------------------------------
            self.forward_events();

            //--- Step 5: Lifecycle -----------------------------------------
            if self.controller.phase().is_final() {
                info!("Logic thread exiting ({:?})", self.controller.phase());
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }
    }

    fn apply(&mut self, command: PlayerCommand) {
        let outcome = match command {
            PlayerCommand::RevealCompleted(scene) => self.controller.reveal_completed(scene),
            PlayerCommand::SkipReveal => self.controller.skip_reveal(),
            PlayerCommand::ManualAdvance => self.controller.manual_advance(),
            PlayerCommand::Activate => self.controller.activate(),
            PlayerCommand::Stop => {
                self.controller.stop();
                return;
            }
        };
        debug!("{:?} -> {:?}", command, outcome);
    }

    fn forward_events(&mut self) {
        for event in self.controller.drain_events() {
            // A dropped receiver only means nobody renders; playback goes on.
            let _ = self.events.send(event);
        }
    }
}
