//! Non-interactive runs of both game modes.

use crate::config::{MotionConfig, TurnConfig};
use crate::error::GameError;
use crate::games::snake::{Heading, MotionEngine, MotionStatus};
use crate::games::tictactoe::TurnController;
use tracing::{info, instrument, warn};

/// A move list that stopped on a rejected move.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Move {} (cell {}) rejected: {}", position, index, source)]
pub struct ReplayError {
    /// Zero-based position of the move in the list.
    pub position: usize,
    /// Cell index that was requested.
    pub index: usize,
    /// Why the controller refused it.
    pub source: GameError,
}

/// Applies `moves` in order to a fresh turn game.
#[instrument(skip(turn))]
pub fn replay(turn: TurnConfig, moves: &[usize]) -> Result<TurnController, ReplayError> {
    let mut controller = TurnController::new(turn.dimensions());
    for (position, &index) in moves.iter().enumerate() {
        controller.apply_move(index).map_err(|source| {
            warn!(position, index, %source, "Replay stopped");
            ReplayError {
                position,
                index,
                source,
            }
        })?;
    }
    info!(status = %controller.status(), "Replay finished");
    Ok(controller)
}

/// Ticks a fresh motion engine once per entry of `path`.
///
/// `Some(heading)` is requested before its tick, `None` keeps the current
/// heading. Entries after a collision are not used.
#[instrument(skip(motion, path), fields(steps = path.len()))]
pub fn simulate(motion: MotionConfig, path: &[Option<Heading>]) -> MotionEngine {
    let mut engine = MotionEngine::new(motion);
    for step in path {
        if engine.status() == MotionStatus::Collided {
            break;
        }
        if let Some(heading) = step {
            engine.set_heading(*heading);
        }
        engine.tick();
    }
    info!(status = %engine.status(), ticks = engine.ticks(), "Simulation finished");
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::{Marker, Point};
    use crate::games::tictactoe::TurnStatus;

    #[test]
    fn test_replay_reports_winner() {
        let controller = replay(TurnConfig::default(), &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(
            controller.status(),
            TurnStatus::Won {
                marker: Marker::O,
                pattern: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_replay_stops_on_rejection() {
        let error = replay(TurnConfig::default(), &[0, 0]).unwrap_err();
        assert_eq!(error.position, 1);
        assert_eq!(error.source, GameError::AlreadyOccupied(0));
    }

    #[test]
    fn test_simulate_follows_path() {
        let path = [None, Some(Heading::Down), None];
        let engine = simulate(MotionConfig::default(), &path);
        assert_eq!(engine.body().head(), Point::new(50, 100));
        assert_eq!(engine.status(), MotionStatus::Running);
    }

    #[test]
    fn test_simulate_stops_after_collision() {
        let path = [Some(Heading::Up), Some(Heading::Down), None];
        let engine = simulate(MotionConfig::default(), &path);
        assert_eq!(engine.status(), MotionStatus::Collided);
        assert_eq!(engine.ticks(), 1);
    }
}
