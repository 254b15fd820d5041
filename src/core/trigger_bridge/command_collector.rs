//=========================================================================
// Command Collector
//=========================================================================
//
// Logic-side command intake with bounded draining and disconnect
// detection.
//
// Architecture:
//   Receiver<PlayerCommand> → collect_frame() → commands → TickControl
//
// Waits up to one frame for the first command, then drains whatever is
// queued (bounded, to keep a flood from starving the tick).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlayerCommand;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CommandCollector ====================================================

/// Collects UI commands for one logic tick.
pub(crate) struct CommandCollector {
    receiver: Receiver<PlayerCommand>,
    commands: Vec<PlayerCommand>,
}

impl CommandCollector {
    pub(crate) fn new(receiver: Receiver<PlayerCommand>) -> Self {
        Self {
            receiver,
            commands: Vec::with_capacity(8),
        }
    }

    /// Collects pending commands, waiting at most `wait` for the first.
    ///
    /// Returns `Exit` once every sender is gone. Commands received before
    /// the disconnect stay available.
    pub(crate) fn collect_frame(&mut self, wait: Duration) -> TickControl {
        const MAX_COMMANDS_PER_FRAME: usize = 64;

        self.commands.clear();

        match self.receiver.recv_timeout(wait) {
            Ok(command) => self.commands.push(command),
            Err(RecvTimeoutError::Timeout) => return TickControl::Continue,
            Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
        }

        while self.commands.len() < MAX_COMMANDS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(command) => self.commands.push(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
            }
        }

        if self.commands.len() >= MAX_COMMANDS_PER_FRAME {
            warn!("Command backlog: drained {} commands this frame", self.commands.len());
        }

        TickControl::Continue
    }

    /// Commands collected this frame.
    #[cfg(test)]
    pub(crate) fn commands(&self) -> &[PlayerCommand] {
        &self.commands
    }

    /// Takes collected commands, leaving an empty buffer.
    pub(crate) fn take_commands(&mut self) -> Vec<PlayerCommand> {
        std::mem::take(&mut self.commands)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
