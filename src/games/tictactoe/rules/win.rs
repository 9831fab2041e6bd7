//! Win detection for turn-mode games.

use crate::games::grid::{Cell, Dimensions, Grid, Marker};
use std::sync::{Arc, LazyLock};
use tracing::instrument;

/// Number of equal markers that make a line.
pub const LINE_LENGTH: usize = 3;

/// Column/row steps of the four line directions: rows, columns,
/// diagonals, anti-diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

static CLASSIC: LazyLock<Arc<WinPatterns>> =
    LazyLock::new(|| Arc::new(WinPatterns::for_dimensions(Dimensions::CLASSIC)));

/// Outcome of evaluating a grid against the win patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinResult {
    /// No pattern is completed.
    NoWin,
    /// `marker` occupies every cell of `pattern`.
    Win {
        /// The marker on the completed line.
        marker: Marker,
        /// Cell indices of the completed line.
        pattern: [usize; LINE_LENGTH],
    },
}

/// Every index triple that forms a line on a grid of fixed dimensions.
///
/// On the 3x3 board this is the familiar set of 8: three rows, three
/// columns and two diagonals. Larger grids get every run of three
/// consecutive cells in those directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPatterns {
    patterns: Vec<[usize; LINE_LENGTH]>,
}

impl WinPatterns {
    /// Precomputes the patterns for `dimensions`.
    #[instrument]
    pub fn for_dimensions(dimensions: Dimensions) -> Self {
        let mut patterns = Vec::new();
        for (dc, dr) in DIRECTIONS {
            for row in 0..dimensions.rows {
                for column in 0..dimensions.columns {
                    if let Some(pattern) = line_from(dimensions, column, row, dc, dr) {
                        patterns.push(pattern);
                    }
                }
            }
        }
        Self { patterns }
    }

    /// The 3x3 set, built once per process.
    pub fn classic() -> &'static WinPatterns {
        &CLASSIC
    }

    /// Shared patterns for `dimensions`, reusing the 3x3 set when possible.
    pub fn shared(dimensions: Dimensions) -> Arc<WinPatterns> {
        if dimensions == Dimensions::CLASSIC {
            Arc::clone(&CLASSIC)
        } else {
            Arc::new(Self::for_dimensions(dimensions))
        }
    }

    /// All patterns, rows first.
    pub fn patterns(&self) -> &[[usize; LINE_LENGTH]] {
        &self.patterns
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true for grids too small to hold a line.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn line_from(
    dimensions: Dimensions,
    column: usize,
    row: usize,
    dc: isize,
    dr: isize,
) -> Option<[usize; LINE_LENGTH]> {
    let mut pattern = [0; LINE_LENGTH];
    for (offset, slot) in pattern.iter_mut().enumerate() {
        let offset = offset as isize;
        let c = usize::try_from(column as isize + dc * offset).ok()?;
        let r = usize::try_from(row as isize + dr * offset).ok()?;
        *slot = dimensions.index_of(c, r)?;
    }
    Some(pattern)
}

/// Checks the grid against every pattern.
///
/// Returns the first pattern whose cells all hold the same marker. After
/// a legal move at most one new line can appear, so ordering among
/// patterns only matters for grids built by hand.
#[instrument(skip_all)]
pub fn evaluate(grid: &Grid, patterns: &WinPatterns) -> WinResult {
    for pattern in patterns.patterns() {
        let [a, b, c] = *pattern;
        if let Some(Cell::Marked(marker)) = grid.get(a)
            && grid.get(b) == Some(Cell::Marked(marker))
            && grid.get(c) == Some(Cell::Marked(marker))
        {
            return WinResult::Win {
                marker,
                pattern: *pattern,
            };
        }
    }

    WinResult::NoWin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_has_eight_patterns() {
        let patterns = WinPatterns::classic();
        assert_eq!(patterns.len(), 8);
        assert_eq!(
            patterns.patterns(),
            &[
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_larger_grid_patterns() {
        // 4x4: 2 runs per row and column, 4 per diagonal direction.
        let patterns = WinPatterns::for_dimensions(Dimensions::new(4, 4));
        assert_eq!(patterns.len(), 8 + 8 + 4 + 4);
        assert!(patterns.patterns().contains(&[1, 6, 11]));
        assert!(patterns.patterns().contains(&[3, 6, 9]));
    }

    #[test]
    fn test_too_small_for_a_line() {
        assert!(WinPatterns::for_dimensions(Dimensions::new(2, 2)).is_empty());
    }

    #[test]
    fn test_shared_reuses_classic() {
        let a = WinPatterns::shared(Dimensions::CLASSIC);
        let b = WinPatterns::shared(Dimensions::CLASSIC);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::new(Dimensions::CLASSIC);
        assert_eq!(evaluate(&grid, WinPatterns::classic()), WinResult::NoWin);
    }

    #[test]
    fn test_winner_top_row() {
        let mut grid = Grid::new(Dimensions::CLASSIC);
        for index in [0, 1, 2] {
            grid.place(index, Marker::X).unwrap();
        }
        assert_eq!(
            evaluate(&grid, WinPatterns::classic()),
            WinResult::Win {
                marker: Marker::X,
                pattern: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut grid = Grid::new(Dimensions::CLASSIC);
        for index in [2, 4, 6] {
            grid.place(index, Marker::O).unwrap();
        }
        assert_eq!(
            evaluate(&grid, WinPatterns::classic()),
            WinResult::Win {
                marker: Marker::O,
                pattern: [2, 4, 6]
            }
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut grid = Grid::new(Dimensions::CLASSIC);
        grid.place(0, Marker::O).unwrap();
        grid.place(1, Marker::O).unwrap();
        grid.place(2, Marker::X).unwrap();
        assert_eq!(evaluate(&grid, WinPatterns::classic()), WinResult::NoWin);
    }
}
