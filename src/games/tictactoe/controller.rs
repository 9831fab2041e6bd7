//! Turn controller: alternates markers, applies moves and decides the
//! outcome after each one.

use super::rules::{WinPatterns, WinResult, evaluate, is_full};
use super::types::{Move, TurnStatus, TurnUpdate};
use crate::error::{GameError, InvalidMoveReason};
use crate::games::grid::{Dimensions, Grid, Marker};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Marker that opens every game.
pub const FIRST_MARKER: Marker = Marker::O;

/// Turn-mode session state.
///
/// Owns the grid, whose dimensions are fixed for the controller's
/// lifetime. `new_game` resets everything else.
#[derive(Debug, Clone)]
pub struct TurnController {
    grid: Grid,
    patterns: Arc<WinPatterns>,
    to_move: Marker,
    status: TurnStatus,
    history: Vec<Move>,
}

impl TurnController {
    /// Creates a controller for a grid of the given dimensions.
    #[instrument]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            grid: Grid::new(dimensions),
            patterns: WinPatterns::shared(dimensions),
            to_move: FIRST_MARKER,
            status: TurnStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Creates a controller for the 3x3 board.
    pub fn classic() -> Self {
        Self::new(Dimensions::CLASSIC)
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the win patterns for this grid.
    pub fn patterns(&self) -> &WinPatterns {
        &self.patterns
    }

    /// Returns the marker due to move next.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Returns the session status.
    pub fn status(&self) -> TurnStatus {
        self.status
    }

    /// Number of moves applied since the last new game.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves applied since the last new game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the active marker at `index`.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidMove`] once the game is won or drawn.
    /// - [`GameError::OutOfBounds`] if `index` is outside the grid.
    /// - [`GameError::AlreadyOccupied`] if the cell is marked.
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(marker = %self.to_move, moves = self.history.len()))]
    pub fn apply_move(&mut self, index: usize) -> Result<TurnUpdate, GameError> {
        if let Some(reason) = self.terminal_reason() {
            warn!(%reason, "Move rejected, game is over");
            return Err(GameError::InvalidMove(reason));
        }

        let marker = self.to_move;
        self.grid.place(index, marker).inspect_err(|error| {
            warn!(%error, "Move rejected");
        })?;

        let action = Move::new(marker, index);
        self.history.push(action);
        self.to_move = marker.opponent();
        debug!(%action, "Move applied");

        self.status = match evaluate(&self.grid, &self.patterns) {
            WinResult::Win { marker, pattern } => {
                info!(%marker, ?pattern, "Line completed");
                TurnStatus::Won { marker, pattern }
            }
            WinResult::NoWin if is_full(&self.grid) => {
                info!(moves = self.history.len(), "Grid full, game drawn");
                TurnStatus::Draw
            }
            WinResult::NoWin => TurnStatus::InProgress,
        };

        Ok(self.update(Some(action)))
    }

    /// Resets the session to its initial state. Always legal.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn new_game(&mut self) -> TurnUpdate {
        info!("Starting new game");
        self.grid = Grid::new(self.grid.dimensions());
        self.to_move = FIRST_MARKER;
        self.status = TurnStatus::InProgress;
        self.history.clear();
        self.update(None)
    }

    /// Snapshot of the current state for the rendering collaborator.
    pub fn update(&self, last_move: Option<Move>) -> TurnUpdate {
        TurnUpdate {
            status: self.status,
            last_move,
            next: self.to_move,
            grid: self.grid.clone(),
        }
    }

    fn terminal_reason(&self) -> Option<InvalidMoveReason> {
        match self.status {
            TurnStatus::InProgress => None,
            TurnStatus::Won { .. } => Some(InvalidMoveReason::AlreadyWon),
            TurnStatus::Draw => Some(InvalidMoveReason::Drawn),
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = TurnController::classic();
        assert_eq!(controller.status(), TurnStatus::InProgress);
        assert_eq!(controller.to_move(), Marker::O);
        assert_eq!(controller.move_count(), 0);
    }

    #[test]
    fn test_markers_alternate() {
        let mut controller = TurnController::classic();
        let update = controller.apply_move(4).unwrap();
        assert_eq!(update.last_move, Some(Move::new(Marker::O, 4)));
        assert_eq!(update.next, Marker::X);

        controller.apply_move(0).unwrap();
        assert_eq!(controller.to_move(), Marker::O);
        assert_eq!(controller.move_count(), 2);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut controller = TurnController::classic();
        controller.apply_move(4).unwrap();
        let grid = controller.grid().clone();

        assert_eq!(controller.apply_move(4), Err(GameError::AlreadyOccupied(4)));
        assert_eq!(
            controller.apply_move(12),
            Err(GameError::OutOfBounds { index: 12, cells: 9 })
        );
        assert_eq!(controller.grid(), &grid);
        assert_eq!(controller.to_move(), Marker::X);
        assert_eq!(controller.move_count(), 1);
    }

    #[test]
    fn test_move_after_win_is_invalid() {
        let mut controller = TurnController::classic();
        for index in [0, 3, 1, 4, 2] {
            controller.apply_move(index).unwrap();
        }
        assert_eq!(
            controller.apply_move(8),
            Err(GameError::InvalidMove(InvalidMoveReason::AlreadyWon))
        );
        assert_eq!(controller.move_count(), 5);
    }

    #[test]
    fn test_new_game_resets() {
        let mut controller = TurnController::classic();
        for index in [0, 3, 1, 4, 2] {
            controller.apply_move(index).unwrap();
        }
        let update = controller.new_game();
        assert_eq!(update.status, TurnStatus::InProgress);
        assert_eq!(update.last_move, None);
        assert_eq!(controller.to_move(), Marker::O);
        assert_eq!(controller.move_count(), 0);
        assert_eq!(controller.grid().open_cells().len(), 9);
    }
}
