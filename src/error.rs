//! Errors reported by the game controllers.
//!
//! Every rejected operation leaves the session untouched; the error is
//! returned to the caller, who decides whether to retry with another
//! address or start a new game.

/// Why a move was refused even though the address was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// A player already completed a line.
    #[display("game already won")]
    AlreadyWon,
    /// Every cell is marked.
    #[display("game ended in a draw")]
    Drawn,
}

/// Error that can occur when applying a move to a grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The address lies outside the grid's fixed dimensions.
    #[display("Cell {} is out of bounds (grid has {} cells)", index, cells)]
    OutOfBounds {
        /// Requested cell index.
        index: usize,
        /// Total number of cells in the grid.
        cells: usize,
    },

    /// The target cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    AlreadyOccupied(#[error(not(source))] usize),

    /// The session reached a terminal status.
    #[display("Invalid move: {}", _0)]
    InvalidMove(#[error(not(source))] InvalidMoveReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::OutOfBounds { index: 9, cells: 9 }.to_string(),
            "Cell 9 is out of bounds (grid has 9 cells)"
        );
        assert_eq!(
            GameError::AlreadyOccupied(4).to_string(),
            "Cell 4 is already occupied"
        );
        assert_eq!(
            GameError::InvalidMove(InvalidMoveReason::Drawn).to_string(),
            "Invalid move: game ended in a draw"
        );
    }
}
