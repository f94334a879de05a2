//! The cost grid and its text format.
//!
//! Input is a character grid of city blocks, one decimal digit per block for
//! the heat loss incurred when a crucible enters that block. The parsed model
//! is wider than the text format: cells hold any `u32` cost, so grids built
//! through [`Grid::from_rows`] may carry costs above 9.

use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;
use thiserror::Error;

/// A grid position, identified by zero-based row and column.
///
/// `Cell` is the composite key used throughout the engine: it indexes the
/// grid, addresses move-graph nodes, and (paired with an orientation) forms
/// the solver's search states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Text or row data could not be turned into a rectangular cost grid.
#[derive(Error, Debug)]
pub enum ParseGridError {
    #[error("invalid cost digit: {found:?}")]
    InvalidDigit { found: char },

    #[error("expected every row to have width {expected}, but row {row} has width {found}")]
    UnevenRows {
        expected: usize,
        row: usize,
        found: usize,
    },

    #[error("grid has no cells")]
    Empty,
}

/// A rectangular grid of non-negative per-cell entry costs.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    costs: DMatrix<u32>,
}

impl Grid {
    /// Build a grid from rows of costs.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::Empty`] if there are no rows or the rows
    /// have no columns, and [`ParseGridError::UnevenRows`] if any row's
    /// width differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, ParseGridError> {
        let Some(expected) = rows.first().map(Vec::len) else {
            return Err(ParseGridError::Empty);
        };
        if expected == 0 {
            return Err(ParseGridError::Empty);
        }
        for (row, costs) in rows.iter().enumerate() {
            if costs.len() != expected {
                return Err(ParseGridError::UnevenRows {
                    expected,
                    row,
                    found: costs.len(),
                });
            }
        }

        let nrows = rows.len();
        let costs = DMatrix::from_row_iterator(nrows, expected, rows.into_iter().flatten());
        Ok(Self { costs })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.costs.nrows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.costs.ncols()
    }

    /// The cost charged when a move enters `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds; check with [`Grid::contains`]
    /// first when the cell is not already known to be valid.
    #[must_use]
    pub fn cost(&self, cell: Cell) -> u32 {
        self.costs[(cell.row, cell.col)]
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// The conventional start cell.
    #[must_use]
    pub fn top_left(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// The conventional destination cell.
    #[must_use]
    pub fn bottom_right(&self) -> Cell {
        // constructors reject empty grids, so both dimensions are non-zero
        Cell::new(self.rows() - 1, self.cols() - 1)
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse digit-map text: one line per row, one digit `0`-`9` per cell.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows = text
            .lines()
            .map(|line| {
                line.chars()
                    .map(|ch| {
                        ch.to_digit(10)
                            .ok_or(ParseGridError::InvalidDigit { found: ch })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}
