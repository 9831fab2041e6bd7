//! View state held by the terminal frontend.
//!
//! The views only mirror what the game loops report; they never touch a
//! controller.

use crate::error::GameError;
use crate::games::grid::{Dimensions, Grid, Lattice, Marker};
use crate::games::snake::MotionUpdate;
use crate::games::tictactoe::{FIRST_MARKER, TurnStatus};
use crate::notify::TurnEvent;
use tracing::debug;

/// What the turn-mode screen shows.
#[derive(Debug, Clone)]
pub struct TurnView {
    grid: Grid,
    status: TurnStatus,
    next: Marker,
    cursor: usize,
    message: String,
}

impl TurnView {
    /// Creates a view of an empty grid.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            grid: Grid::new(dimensions),
            status: TurnStatus::InProgress,
            next: FIRST_MARKER,
            cursor: 0,
            message: format!("Player {}'s turn", FIRST_MARKER),
        }
    }

    /// Last reported grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the highlight.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Status line text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Cells of the completed line, once someone won.
    pub fn winning_pattern(&self) -> Option<[usize; 3]> {
        match self.status {
            TurnStatus::Won { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Applies a notification from the turn loop.
    pub fn apply(&mut self, event: TurnEvent) {
        debug!(?event, "Handling turn event");

        match event {
            TurnEvent::Updated(update) => {
                self.grid = update.grid;
                self.status = update.status;
                self.next = update.next;
                self.message = match (update.status, update.last_move) {
                    (TurnStatus::Won { marker, .. }, _) => {
                        format!("{} wins! Press 'r' to restart or 'q' to quit.", marker)
                    }
                    (TurnStatus::Draw, _) => {
                        "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string()
                    }
                    (TurnStatus::InProgress, Some(last)) => format!(
                        "{} played cell {}. Player {}'s turn",
                        last.marker,
                        last.index + 1,
                        self.next
                    ),
                    (TurnStatus::InProgress, None) => format!("Player {}'s turn", self.next),
                };
            }
            TurnEvent::Rejected(error) => {
                self.message = rejection_message(&error);
            }
        }
    }
}

/// Describes a refused selection with cells numbered from 1.
fn rejection_message(error: &GameError) -> String {
    match error {
        GameError::OutOfBounds { index, cells } => {
            format!("Cell {} is off the board (cells 1-{})", index + 1, cells)
        }
        GameError::AlreadyOccupied(index) => format!("Cell {} is already taken", index + 1),
        GameError::InvalidMove(_) => format!("{}. Press 'r' to restart.", error),
    }
}

/// What the motion-mode screen shows.
#[derive(Debug, Clone)]
pub struct MotionView {
    lattice: Lattice,
    update: MotionUpdate,
}

impl MotionView {
    /// Creates a view from the engine's initial snapshot.
    pub fn new(lattice: Lattice, update: MotionUpdate) -> Self {
        Self { lattice, update }
    }

    /// Playfield bounds.
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Last reported tick.
    pub fn update(&self) -> &MotionUpdate {
        &self.update
    }

    /// Applies a notification from the motion loop.
    pub fn apply(&mut self, update: MotionUpdate) {
        self.update = update;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::TurnController;

    #[test]
    fn test_turn_view_follows_updates() {
        let mut controller = TurnController::classic();
        let mut view = TurnView::new(Dimensions::CLASSIC);

        view.apply(TurnEvent::Updated(controller.apply_move(4).unwrap()));
        assert_eq!(view.message(), "O played cell 5. Player X's turn");
        assert_eq!(view.grid(), controller.grid());

        view.apply(TurnEvent::Rejected(GameError::AlreadyOccupied(4)));
        assert_eq!(view.message(), "Cell 5 is already taken");

        view.apply(TurnEvent::Rejected(GameError::OutOfBounds { index: 9, cells: 9 }));
        assert_eq!(view.message(), "Cell 10 is off the board (cells 1-9)");
    }

    #[test]
    fn test_turn_view_shows_winner() {
        let mut controller = TurnController::classic();
        let mut view = TurnView::new(Dimensions::CLASSIC);
        for index in [0, 3, 1, 4, 2] {
            view.apply(TurnEvent::Updated(controller.apply_move(index).unwrap()));
        }
        assert_eq!(view.winning_pattern(), Some([0, 1, 2]));
        assert!(view.message().starts_with("O wins!"));
    }
}
