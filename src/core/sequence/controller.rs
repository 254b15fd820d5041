//=========================================================================
// Sequence Controller
//=========================================================================
//
// The playback state machine.
//
// Owns the current scene index, the reveal run, the single pending timer
// and the completion signal. Every trigger and every timer payload is
// applied on the owner's thread, at call time or at the `update()` tick
// boundary; nothing here runs concurrently.
//
// Flow per tick:
//   update() → poll reveal run → pop due timers one by one → apply
//
// Ordering: every scene change cancels the previous timer and reveal run
// before the next scene's run starts.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::state::{PlaybackState, TimerEvent};
use super::{DiscardReason, EventQueue, Phase, SequenceConfig, SequenceEvent, TriggerOutcome};
use crate::core::catalog::{Scene, SceneCatalog, SceneId};
use crate::core::clock::{Clock, Scheduler, TimerHandle};
use crate::core::reveal::{RevealCursor, RevealFrame, RevealRun, RevealToken};

//=== CompletionSignal ====================================================

/// One-shot notification that the whole sequence finished.
pub type CompletionSignal = Box<dyn FnOnce() + Send + 'static>;

//=== SequenceController ==================================================

/// Drives one run of a narrative sequence.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use aetheric_sequencer::prelude::*;
///
/// let catalog = SceneCatalog::new(vec![
///     Scene::new(1, ["Somewhere far away…"], "space.jpg"),
///     Scene::new(2, ["The signal arrives."], "signal.jpg"),
/// ]).unwrap();
///
/// let clock = ManualClock::new();
/// let config = SequenceConfig::default().with_pacing(RevealPacing::instant());
/// let mut controller = SequenceController::new(catalog, config, Arc::new(clock.clone()), || {});
///
/// controller.update();
/// assert_eq!(controller.phase(), Phase::AwaitingAdvance(0));
///
/// clock.advance_ms(5000);
/// controller.update();
/// assert_eq!(controller.phase(), Phase::Presenting(1));
/// ```
pub struct SequenceController {
    catalog: SceneCatalog,
    config: SequenceConfig,
    timers: Scheduler<TimerEvent>,
    state: PlaybackState,
    reveal: Option<RevealRun>,
    last_cursor: Option<RevealCursor>,
    generation: u64,
    events: EventQueue,
    on_complete: Option<CompletionSignal>,
}

impl SequenceController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller in `Presenting(0)` with the first reveal started.
    pub fn new<F>(
        catalog: SceneCatalog,
        config: SequenceConfig,
        clock: Arc<dyn Clock>,
        on_complete: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        info!("Starting sequence with {} scenes", catalog.len());

        let mut controller = Self {
            catalog,
            config,
            timers: Scheduler::new(clock),
            state: PlaybackState::new(),
            reveal: None,
            last_cursor: None,
            generation: 0,
            events: EventQueue::new(),
            on_complete: Some(Box::new(on_complete)),
        };

        controller.enter_scene(0);
        controller
    }

    //--- Queries ----------------------------------------------------------

    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Index of the current scene; stays on the terminal scene after exit.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_scene(&self) -> &Scene {
        &self.catalog.scenes()[self.state.current_index]
    }

    pub fn is_reveal_complete(&self) -> bool {
        self.state.reveal_complete
    }

    /// Whether an auto-advance or exit fade is armed.
    pub fn has_pending_timer(&self) -> bool {
        self.state.pending().is_some()
    }

    /// The current scene's reveal run, while a scene is showing.
    pub fn reveal(&self) -> Option<&RevealRun> {
        self.reveal.as_ref()
    }

    /// Visible text of the current scene at the clock's current time.
    pub fn frame(&self) -> Option<RevealFrame<'_>> {
        let now = self.timers.now();
        self.reveal.as_ref().map(|run| run.frame(now))
    }

    /// Earliest time at which `update()` has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        let reveal_end = match self.state.phase {
            Phase::Presenting(_) => self.reveal.as_ref().map(RevealRun::ends_at),
            _ => None,
        };

        match (self.timers.next_deadline(), reveal_end) {
            (Some(timer), Some(reveal)) => Some(timer.min(reveal)),
            (timer, reveal) => timer.or(reveal),
        }
    }

    /// Takes all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SequenceEvent> {
        self.events.take()
    }

    //--- Triggers ---------------------------------------------------------

    /// The reveal for `scene` finished (from an external typewriter).
    ///
    /// Ignored unless `scene` is the one currently presenting.
    pub fn reveal_completed(&mut self, scene: SceneId) -> TriggerOutcome {
        if self.state.phase.is_final() {
            return self.discard("reveal_completed", DiscardReason::Finished);
        }

        match self.state.phase {
            Phase::Presenting(index) if self.catalog.scenes()[index].id == scene => {
                self.finish_reveal(index);
                TriggerOutcome::Applied
            }
            _ => {
                debug!("Late reveal completion for scene {} in {:?}", scene, self.state.phase);
                TriggerOutcome::Discarded(DiscardReason::LateCallback)
            }
        }
    }

    /// Fast-forwards the current scene's reveal.
    pub fn skip_reveal(&mut self) -> TriggerOutcome {
        match self.state.phase {
            Phase::Presenting(index) => {
                self.finish_reveal(index);
                TriggerOutcome::Applied
            }
            phase if phase.is_final() => self.discard("skip_reveal", DiscardReason::Finished),
            _ => self.discard("skip_reveal", DiscardReason::WrongPhase),
        }
    }

    /// Advances to the next scene without waiting for the timer.
    pub fn manual_advance(&mut self) -> TriggerOutcome {
        match self.state.phase {
            Phase::AwaitingAdvance(index) if self.catalog.is_terminal(index) => {
                self.discard("manual_advance", DiscardReason::TerminalScene)
            }
            Phase::AwaitingAdvance(index) => {
                self.advance_from(index);
                TriggerOutcome::Applied
            }
            phase if phase.is_final() => self.discard("manual_advance", DiscardReason::Finished),
            _ => self.discard("manual_advance", DiscardReason::WrongPhase),
        }
    }

    /// User activation on the terminal scene; starts the exit fade.
    pub fn activate(&mut self) -> TriggerOutcome {
        match self.state.phase {
            Phase::AwaitingAdvance(index) if self.catalog.is_terminal(index) => {
                self.begin_exit();
                TriggerOutcome::Applied
            }
            Phase::Presenting(index)
                if self.catalog.is_terminal(index) && self.config.activate_during_reveal =>
            {
                self.begin_exit();
                TriggerOutcome::Applied
            }
            phase if phase.is_final() => self.discard("activate", DiscardReason::Finished),
            _ => self.discard("activate", DiscardReason::WrongPhase),
        }
    }

    //--- Tick Boundary ----------------------------------------------------

    /// Polls the reveal run and applies every due timer.
    pub fn update(&mut self) {
        if self.state.phase.is_final() {
            return;
        }

        self.poll_reveal();

        while let Some((handle, event)) = self.timers.pop_due() {
            self.apply_timer(handle, event);
        }
    }

    //--- Teardown ---------------------------------------------------------

    /// Abandons playback: cancels all timers and the reveal run.
    ///
    /// The completion signal is dropped without being invoked.
    pub fn stop(&mut self) {
        if self.state.phase.is_final() {
            return;
        }

        self.state.clear_timer(&mut self.timers);
        self.timers.cancel_all();
        self.cancel_reveal();
        self.on_complete = None;

        info!("Sequence stopped at scene index {}", self.state.current_index);
        self.state.phase = Phase::Stopped;
        self.events.push(SequenceEvent::Stopped);
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter_scene(&mut self, index: usize) {
        self.state.clear_timer(&mut self.timers);
        self.cancel_reveal();

        let scene = &self.catalog.scenes()[index];
        let token = RevealToken {
            scene: scene.id,
            generation: self.generation,
        };
        self.generation += 1;

        self.state.current_index = index;
        self.state.reveal_complete = false;
        self.state.phase = Phase::Presenting(index);

        self.reveal = Some(RevealRun::start(
            token,
            scene.lines.clone(),
            self.config.pacing,
            self.timers.now(),
        ));
        self.last_cursor = None;

        debug!("Entered scene {} (index {})", scene.id, index);
        self.events.push(SequenceEvent::SceneEntered {
            index,
            scene: scene.id,
        });
    }

    fn finish_reveal(&mut self, index: usize) {
        let scene = self.catalog.scenes()[index].id;

        if let Some(run) = self.reveal.as_mut() {
            run.skip();
        }

        self.state.reveal_complete = true;
        self.state.phase = Phase::AwaitingAdvance(index);
        self.events.push(SequenceEvent::RevealCompleted { scene });

        if self.catalog.is_terminal(index) {
            self.state.clear_timer(&mut self.timers);
            debug!("Terminal scene {} revealed, awaiting activation", scene);
            self.events.push(SequenceEvent::ActivationArmed { scene });
        } else {
            let delay = self.config.auto_advance_delay;
            self.state
                .replace_timer(&mut self.timers, delay, TimerEvent::AutoAdvance { from: index });
            self.events.push(SequenceEvent::AutoAdvanceArmed { scene, delay });
        }
    }

    fn advance_from(&mut self, from: usize) {
        let next = from + 1;
        debug_assert!(next <= self.catalog.last_index(), "advance past terminal scene");
        self.enter_scene(next);
    }

    fn begin_exit(&mut self) {
        self.cancel_reveal();
        self.state.phase = Phase::Exiting;

        let delay = self.config.exit_delay;
        self.state
            .replace_timer(&mut self.timers, delay, TimerEvent::ExitFade);

        info!("Sequence exiting (fade {:?})", delay);
        self.events.push(SequenceEvent::ExitStarted);
    }

    fn complete(&mut self) {
        self.state.clear_timer(&mut self.timers);
        self.state.phase = Phase::Done;
        self.events.push(SequenceEvent::Completed);

        if let Some(signal) = self.on_complete.take() {
            info!("Sequence complete");
            signal();
        }
    }

    fn poll_reveal(&mut self) {
        let Phase::Presenting(index) = self.state.phase else {
            return;
        };
        let now = self.timers.now();
        let Some(run) = self.reveal.as_mut() else {
            return;
        };

        let cursor = run.frame(now).cursor;
        if self.last_cursor != Some(cursor) {
            self.last_cursor = Some(cursor);
            self.events.push(SequenceEvent::RevealProgress {
                scene: run.token().scene,
                cursor,
            });
        }

        if run.poll_complete(now) {
            self.finish_reveal(index);
        }
    }

    fn apply_timer(&mut self, handle: TimerHandle, event: TimerEvent) {
        if !self.state.claim_fired(handle) {
            debug!("Discarding superseded {:?} ({})", event, handle);
            return;
        }

        match (event, self.state.phase) {
            (TimerEvent::AutoAdvance { from }, Phase::AwaitingAdvance(index))
                if from == index && !self.catalog.is_terminal(index) =>
            {
                self.advance_from(index);
            }
            (TimerEvent::ExitFade, Phase::Exiting) => self.complete(),
            (event, phase) => debug!("Discarding {:?} fired in {:?}", event, phase),
        }
    }

    fn cancel_reveal(&mut self) {
        if let Some(mut run) = self.reveal.take() {
            run.cancel();
        }
    }

    fn discard(&self, trigger: &str, reason: DiscardReason) -> TriggerOutcome {
        debug!("Ignoring {} in {:?}: {:?}", trigger, self.state.phase, reason);
        TriggerOutcome::Discarded(reason)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
