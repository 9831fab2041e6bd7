//! Tick-driven motion engine.

use super::body::Body;
use super::heading::Heading;
use crate::config::MotionConfig;
use crate::games::grid::{Lattice, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of a motion-mode session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MotionStatus {
    /// Ticks advance the body.
    Running,
    /// The head tried to leave the playfield. Terminal until reset.
    Collided,
}

/// Notification emitted after every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionUpdate {
    /// Body positions, tail first.
    pub body: Vec<Point>,
    /// Status after the tick.
    pub status: MotionStatus,
    /// Heading the tick was taken in.
    pub heading: Heading,
    /// Ticks taken since the last reset.
    pub ticks: u64,
}

/// Tick-driven movement on a bounded lattice.
///
/// Only boundary collisions end a session; the head passing over its own
/// body is not detected.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    config: MotionConfig,
    lattice: Lattice,
    body: Body,
    heading: Heading,
    pending: Option<Heading>,
    status: MotionStatus,
    ticks: u64,
}

impl MotionEngine {
    /// Creates an engine with the configured starting body.
    #[instrument]
    pub fn new(config: MotionConfig) -> Self {
        Self {
            lattice: config.lattice(),
            body: config.initial_body(),
            heading: *config.heading(),
            pending: None,
            status: MotionStatus::Running,
            ticks: 0,
            config,
        }
    }

    /// Restores the starting body, heading and status. Any buffered
    /// heading is discarded.
    #[instrument(skip(self), fields(ticks = self.ticks))]
    pub fn reset(&mut self) -> MotionUpdate {
        info!("Resetting motion engine");
        *self = Self::new(self.config);
        self.update()
    }

    /// Returns the body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the playfield bounds.
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Heading used by the last tick.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Heading waiting for the next tick, if any.
    pub fn pending_heading(&self) -> Option<Heading> {
        self.pending
    }

    /// Returns the status.
    pub fn status(&self) -> MotionStatus {
        self.status
    }

    /// Ticks taken since the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Buffers a heading for the next tick. The last call before a tick
    /// wins.
    ///
    /// A heading opposite to the committed one is refused while the body
    /// is longer than one segment, since the head would turn straight
    /// into its neck. Returns whether the heading was accepted.
    #[instrument(skip(self), fields(committed = %self.heading))]
    pub fn set_heading(&mut self, heading: Heading) -> bool {
        if self.status == MotionStatus::Collided {
            debug!("Ignoring heading change after collision");
            return false;
        }
        if self.body.len() > 1 && heading.is_opposite(self.heading) {
            debug!("Refusing reversal");
            return false;
        }
        self.pending = Some(heading);
        true
    }

    /// Advances the body one step in the buffered heading.
    ///
    /// When the new head would leave the playfield the status becomes
    /// [`MotionStatus::Collided`] and the body stays where it was. Once
    /// collided, ticks do nothing.
    #[instrument(skip(self), fields(tick = self.ticks))]
    pub fn tick(&mut self) -> MotionUpdate {
        if self.status == MotionStatus::Collided {
            return self.update();
        }

        if let Some(heading) = self.pending.take() {
            self.heading = heading;
        }

        let (dx, dy) = self.heading.delta();
        let step = self.lattice.step;
        let new_head = dx
            .checked_mul(step)
            .zip(dy.checked_mul(step))
            .and_then(|(dx, dy)| self.body.head().moved_by(dx, dy));
        self.ticks += 1;

        if let Some(new_head) = new_head.filter(|p| self.lattice.contains(*p)) {
            self.body.advance(new_head);
            debug!(head = %new_head, heading = %self.heading, "Body advanced");
        } else {
            self.status = MotionStatus::Collided;
            info!(
                head = %self.body.head(),
                heading = %self.heading,
                "Head left the playfield"
            );
        }

        self.update()
    }

    /// Snapshot of the current state for the rendering collaborator.
    pub fn update(&self) -> MotionUpdate {
        MotionUpdate {
            body: self.body.to_vec(),
            status: self.status,
            heading: self.heading,
            ticks: self.ticks,
        }
    }
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
