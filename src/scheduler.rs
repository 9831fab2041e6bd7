//! Game loops: the turn loop reacts to input events only, the motion loop
//! also advances the engine on every clock tick.
//!
//! Both loops own their controller while running and hand it back when
//! the loop ends. All mutation happens synchronously between two awaits,
//! so an input is always fully applied before the next one (or the next
//! tick) is looked at.

use crate::games::snake::{Heading, MotionEngine, MotionStatus, MotionUpdate};
use crate::games::tictactoe::TurnController;
use crate::notify::{RenderTarget, TurnEvent};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument};

/// Events delivered by the input source, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A cell was chosen (turn mode).
    CellSelected(usize),
    /// A new heading was requested (motion mode).
    HeadingChanged(Heading),
    /// Discard the current game and start over.
    NewGame,
    /// Stop the loop.
    Quit,
}

/// Periodic tick supplier for the motion loop.
#[async_trait]
pub trait TickSource: Send {
    /// Waits for the next tick. Returns `false` once the clock has stopped.
    async fn tick(&mut self) -> bool;

    /// Restarts the period from now, dropping any tick already due.
    fn restart(&mut self) {}
}

/// Wall-clock ticks at a fixed period.
///
/// Late ticks push the schedule back instead of bursting to catch up, so
/// ticks may drift under load.
#[derive(Debug)]
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    /// Creates a clock whose first tick fires one `period` from now.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// The tick period.
    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl TickSource for IntervalClock {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }

    fn restart(&mut self) {
        self.interval.reset();
    }
}

/// Clock stepped by hand through a [`ClockHandle`].
#[derive(Debug)]
pub struct ManualClock {
    steps: mpsc::UnboundedReceiver<()>,
}

/// Issues ticks to a [`ManualClock`]. Dropping every handle stops the
/// clock once the queued ticks are consumed.
#[derive(Debug, Clone)]
pub struct ClockHandle {
    steps: mpsc::UnboundedSender<()>,
}

impl ManualClock {
    /// Creates a clock and the handle that drives it.
    pub fn new() -> (Self, ClockHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { steps: rx }, ClockHandle { steps: tx })
    }
}

impl ClockHandle {
    /// Queues one tick. Returns `false` if the clock is gone.
    pub fn step(&self) -> bool {
        self.steps.send(()).is_ok()
    }

    /// Queues `count` ticks.
    pub fn steps(&self, count: usize) -> bool {
        (0..count).all(|_| self.step())
    }
}

#[async_trait]
impl TickSource for ManualClock {
    async fn tick(&mut self) -> bool {
        self.steps.recv().await.is_some()
    }
}

/// Runs a turn-mode session until `Quit` or until the input source closes.
///
/// Emits the initial state, then one [`TurnEvent`] per handled selection
/// or new game. There is no timer: nothing happens between inputs.
#[instrument(skip_all)]
pub async fn run_turn_loop<R>(
    mut controller: TurnController,
    mut inputs: mpsc::UnboundedReceiver<InputEvent>,
    mut target: R,
) -> TurnController
where
    R: RenderTarget<TurnEvent>,
{
    info!("Turn loop started");
    target.render(TurnEvent::Updated(controller.update(None)));

    while let Some(event) = inputs.recv().await {
        match event {
            InputEvent::CellSelected(index) => match controller.apply_move(index) {
                Ok(update) => target.render(TurnEvent::Updated(update)),
                Err(error) => target.render(TurnEvent::Rejected(error)),
            },
            InputEvent::NewGame => target.render(TurnEvent::Updated(controller.new_game())),
            InputEvent::HeadingChanged(heading) => {
                debug!(%heading, "Ignoring heading change in turn mode");
            }
            InputEvent::Quit => break,
        }
    }

    info!(status = %controller.status(), moves = controller.move_count(), "Turn loop finished");
    controller
}

/// Runs a motion-mode session.
///
/// Emits the initial state, then the full [`MotionUpdate`] after every
/// tick. Heading changes are buffered by the engine and take effect on the
/// next tick. After a collision no more ticks are taken; a `NewGame`
/// input resets the engine and restarts the clock. The loop ends on
/// `Quit`, when the input source closes, or when the clock stops.
#[instrument(skip_all)]
pub async fn run_motion_loop<C, R>(
    mut engine: MotionEngine,
    mut clock: C,
    mut inputs: mpsc::UnboundedReceiver<InputEvent>,
    mut target: R,
) -> MotionEngine
where
    C: TickSource,
    R: RenderTarget<MotionUpdate>,
{
    info!("Motion loop started");
    target.render(engine.update());
    let mut ticking = engine.status() == MotionStatus::Running;

    loop {
        tokio::select! {
            biased;

            event = inputs.recv() => match event {
                Some(InputEvent::HeadingChanged(heading)) => {
                    engine.set_heading(heading);
                }
                Some(InputEvent::NewGame) => {
                    target.render(engine.reset());
                    clock.restart();
                    ticking = true;
                }
                Some(InputEvent::CellSelected(index)) => {
                    debug!(index, "Ignoring cell selection in motion mode");
                }
                Some(InputEvent::Quit) | None => break,
            },

            running = clock.tick(), if ticking => {
                if !running {
                    info!("Clock stopped");
                    break;
                }
                let update = engine.tick();
                let collided = update.status == MotionStatus::Collided;
                target.render(update);
                if collided {
                    ticking = false;
                    info!(ticks = engine.ticks(), "Collision, ticks stopped");
                }
            }
        }
    }

    info!(status = %engine.status(), ticks = engine.ticks(), "Motion loop finished");
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_clock_stops_when_handle_dropped() {
        let (mut clock, handle) = ManualClock::new();
        assert!(handle.steps(2));
        drop(handle);
        assert!(clock.tick().await);
        assert!(clock.tick().await);
        assert!(!clock.tick().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_clock_waits_one_period() {
        let mut clock = IntervalClock::new(Duration::from_millis(200));
        let start = Instant::now();
        assert!(clock.tick().await);
        assert!(start.elapsed() >= Duration::from_millis(200));
        assert!(clock.tick().await);
        assert!(start.elapsed() >= Duration::from_millis(400));
        assert_eq!(clock.period(), Duration::from_millis(200));
    }
}
