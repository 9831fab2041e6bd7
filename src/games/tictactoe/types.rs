//! Core domain types for turn-mode games.

use crate::games::grid::{Grid, Marker};
use serde::{Deserialize, Serialize};

/// A move: a marker placed at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The marker that was placed.
    pub marker: Marker,
    /// Row-major index of the cell.
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.marker, self.index)
    }
}

/// Current status of a turn-mode session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// Moves are accepted.
    InProgress,
    /// A marker completed a line.
    Won {
        /// The winning marker.
        marker: Marker,
        /// Cell indices of the completed line.
        pattern: [usize; 3],
    },
    /// Every cell is marked and nobody completed a line.
    Draw,
}

impl TurnStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnStatus::InProgress)
    }
}

impl std::fmt::Display for TurnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnStatus::InProgress => write!(f, "In progress"),
            TurnStatus::Won { marker, pattern } => {
                write!(f, "{} wins with {:?}", marker, pattern)
            }
            TurnStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Notification emitted after every turn-mode transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnUpdate {
    /// Status after the transition.
    pub status: TurnStatus,
    /// The move that caused it; `None` after a new game.
    pub last_move: Option<Move>,
    /// Marker due to move next.
    pub next: Marker,
    /// Snapshot of the grid after the transition.
    pub grid: Grid,
}
