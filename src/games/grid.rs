//! Fixed-size grids shared by both game modes.
//!
//! Turn mode addresses a [`Grid`] of [`Cell`]s by index or by
//! `(column, row)`. Motion mode only needs the bounds of a [`Lattice`],
//! since the body tracks its own positions.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker placed on a cell in turn mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Marker {
    /// Moves first.
    O,
    /// Moves second.
    X,
}

impl Marker {
    /// Returns the marker that moves after this one.
    pub fn opponent(self) -> Self {
        match self {
            Marker::O => Marker::X,
            Marker::X => Marker::O,
        }
    }
}

/// A cell in a turn-mode grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a marker for the rest of the game.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker if the cell is marked.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }
}

/// Column and row counts of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Dimensions {
    /// Number of columns.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
}

impl Dimensions {
    /// The 3x3 board.
    pub const CLASSIC: Dimensions = Dimensions {
        columns: 3,
        rows: 3,
    };

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Row-major index of `(column, row)`, if inside the grid.
    pub fn index_of(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }

    /// `(column, row)` of a row-major index, if inside the grid.
    pub fn coord_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells()).then(|| (index % self.columns, index / self.columns))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Fixed-size grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid. The dimensions never change afterwards.
    #[instrument]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::Empty; dimensions.cells()],
        }
    }

    /// Returns the grid's dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Gets the cell at `index`.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at `(column, row)`.
    pub fn get_at(&self, column: usize, row: usize) -> Option<Cell> {
        self.dimensions
            .index_of(column, row)
            .and_then(|index| self.get(index))
    }

    /// Overwrites the cell at `index` without checking occupancy.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), GameError> {
        let cells = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfBounds { index, cells })?;
        *slot = cell;
        Ok(())
    }

    /// Marks an empty cell.
    ///
    /// Fails with [`GameError::AlreadyOccupied`] if the cell already holds
    /// a marker; the grid is left unchanged.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<(), GameError> {
        match self.get(index) {
            None => Err(GameError::OutOfBounds {
                index,
                cells: self.cells.len(),
            }),
            Some(Cell::Marked(_)) => Err(GameError::AlreadyOccupied(index)),
            Some(Cell::Empty) => self.set(index, Cell::Marked(marker)),
        }
    }

    /// Checks if a cell is empty. Out-of-bounds indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of the cells that can still be marked.
    pub fn open_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Formats the grid as text, numbering empty cells from 1.
    pub fn display(&self) -> String {
        let columns = self.dimensions.columns;
        let width = self.cells.len().to_string().len();
        let rows: Vec<String> = self
            .cells
            .chunks(columns)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| match cell {
                        Cell::Empty => format!("{:>width$}", row * columns + column + 1),
                        Cell::Marked(marker) => format!("{:>width$}", marker),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        let separator = vec!["-".repeat(width); columns].join("+");
        rows.join(&format!("\n{}\n", separator))
    }
}

/// A point on the motion lattice, in lattice units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// Point shifted by `(dx, dy)`, or `None` if a coordinate overflows.
    pub fn moved_by(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bounds of the motion playfield: a `width` x `height` area walked in
/// increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Lattice {
    /// Exclusive upper bound on `x`.
    pub width: i32,
    /// Exclusive upper bound on `y`.
    pub height: i32,
    /// Distance covered by one move.
    pub step: i32,
}

impl Lattice {
    /// Checks if a point lies inside the playfield.
    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Checks if a point sits on a lattice node.
    pub fn is_aligned(&self, point: Point) -> bool {
        self.step > 0 && point.x % self.step == 0 && point.y % self.step == 0
    }

    /// Number of nodes per row.
    pub fn columns(&self) -> usize {
        usize::try_from(self.width / self.step.max(1)).unwrap_or(0)
    }

    /// Number of nodes per column.
    pub fn rows(&self) -> usize {
        usize::try_from(self.height / self.step.max(1)).unwrap_or(0)
    }

    /// Maps a point to its `(column, row)` node, if inside the playfield.
    pub fn node_of(&self, point: Point) -> Option<(usize, usize)> {
        if !self.contains(point) || self.step <= 0 {
            return None;
        }
        let column = usize::try_from(point.x / self.step).ok()?;
        let row = usize::try_from(point.y / self.step).ok()?;
        Some((column, row))
    }
}
