//! Draw detection for turn-mode games.

use crate::games::grid::{Cell, Grid};
use tracing::instrument;

/// Checks if every cell of the grid is marked.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| *cell != Cell::Empty)
}
