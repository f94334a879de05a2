//! The move graph: every legal straight run precomputed as a weighted edge.
//!
//! A crucible commits to a straight run of `min..=max` cells and must then
//! turn onto the other axis. Rather than tracking a run-length counter during
//! search, the builder records each whole run as one edge carrying the summed
//! cost of the cells it enters. The alternation rule then falls out of the
//! graph's shape: a move arriving on one axis may only continue through the
//! other axis's edge list, and the search state stays at two entries per cell
//! no matter how large `max` is.

use thiserror::Error;

use crate::grid::{Cell, Grid};

/// A cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The axis this direction moves along.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::North | Self::South => Orientation::Vertical,
            Self::East | Self::West => Orientation::Horizontal,
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// The neighboring cell in this direction, or `None` on `usize`
    /// underflow or overflow. The caller still checks the grid's far edges.
    fn step(self, cell: Cell) -> Option<Cell> {
        match self {
            Self::North => cell.row.checked_sub(1).map(|row| Cell::new(row, cell.col)),
            Self::South => cell.row.checked_add(1).map(|row| Cell::new(row, cell.col)),
            Self::East => cell.col.checked_add(1).map(|col| Cell::new(cell.row, col)),
            Self::West => cell.col.checked_sub(1).map(|col| Cell::new(cell.row, col)),
        }
    }
}

/// The axis of a move. Consecutive moves must alternate orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The other axis, which the next move must take.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Run-length limits are not usable as given.
#[derive(Error, Debug)]
pub enum InvalidRunBounds {
    #[error("minimum run length must be at least 1")]
    ZeroMin,

    #[error("minimum run length {min} exceeds maximum {max}")]
    Inverted { min: u32, max: u32 },
}

/// Validated minimum and maximum run lengths for a single straight move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunBounds {
    min: u32,
    max: u32,
}

impl RunBounds {
    /// The basic crucible: up to three cells before a forced turn.
    pub const CRUCIBLE: Self = Self { min: 1, max: 3 };

    /// The ultra crucible: at least four cells before it can turn, at most
    /// ten before it gets wobbly.
    pub const ULTRA: Self = Self { min: 4, max: 10 };

    /// Validate and construct run bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRunBounds`] if `min` is zero or exceeds `max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, InvalidRunBounds> {
        if min == 0 {
            return Err(InvalidRunBounds::ZeroMin);
        }
        if min > max {
            return Err(InvalidRunBounds::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }
}

/// One precomputed edge: a straight run from some origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
    /// The cell the run ends on.
    pub dest: Cell,
    /// Summed cost of every cell the run enters (origin excluded,
    /// destination included).
    pub cost: u64,
    /// How many cells the run covers.
    pub run: u32,
}

#[derive(Debug, Default)]
struct CellMoves {
    horizontal: Vec<MoveTarget>,
    vertical: Vec<MoveTarget>,
}

/// Every legal run from every cell, grouped by the run's orientation.
///
/// Read-only once built.
#[derive(Debug)]
pub struct MoveGraph {
    rows: usize,
    cols: usize,
    cells: Vec<CellMoves>,
}

impl MoveGraph {
    /// Precompute all legal runs in `grid` under `bounds`.
    ///
    /// For each cell and direction the builder walks outward one cell at a
    /// time, accumulating entry costs, and records a [`MoveTarget`] for each
    /// run length within bounds. Walking stops at the grid edge, since any
    /// longer run in that direction would also leave the grid.
    #[must_use]
    pub fn build(grid: &Grid, bounds: RunBounds) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();
        let mut cells = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                let origin = Cell::new(row, col);
                let mut moves = CellMoves::default();

                for direction in Direction::ALL {
                    let list = match direction.orientation() {
                        Orientation::Horizontal => &mut moves.horizontal,
                        Orientation::Vertical => &mut moves.vertical,
                    };

                    let mut cursor = origin;
                    let mut cost = 0u64;
                    for run in 1..=bounds.max() {
                        let Some(next) = direction.step(cursor).filter(|cell| grid.contains(*cell))
                        else {
                            break;
                        };
                        cursor = next;
                        cost += u64::from(grid.cost(next));
                        if run >= bounds.min() {
                            list.push(MoveTarget {
                                dest: next,
                                cost,
                                run,
                            });
                        }
                    }
                }

                cells.push(moves);
            }
        }

        Self { rows, cols, cells }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The legal runs leaving `cell` along `orientation`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds; check with [`MoveGraph::contains`]
    /// first when the cell is not already known to be valid.
    #[must_use]
    pub fn moves(&self, cell: Cell, orientation: Orientation) -> &[MoveTarget] {
        let moves = &self.cells[cell.row * self.cols + cell.col];
        match orientation {
            Orientation::Horizontal => &moves.horizontal,
            Orientation::Vertical => &moves.vertical,
        }
    }
}
