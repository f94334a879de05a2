//! Constrained shortest-path engine for the "Clumsy Crucible" puzzle
//! (Advent of Code 2023, day 17).
//!
//! A crucible rolls through a rectangular city grid from the top-left block
//! to the bottom-right block. Entering a block costs that block's heat loss.
//! The crucible must travel a straight run of between `min` and `max` blocks
//! before every turn, and consecutive runs must alternate between the
//! horizontal and vertical axes.
//!
//! The engine is three stages, composed in order:
//!
//! 1. [`Grid`] parses the digit-map text into a cost matrix.
//! 2. [`MoveGraph::build`] precomputes every legal run as a single weighted
//!    edge, so the run-length rule lives in the graph rather than in search
//!    state.
//! 3. [`solve`] runs Dijkstra over `(cell, orientation)` states, where the
//!    orientation is the axis of the run that arrived at the cell.
//!
//! ```
//! use clumsy_crucible::{Grid, RunBounds, minimum_heat_loss};
//!
//! let grid: Grid = "24\n32".parse()?;
//! let route = minimum_heat_loss(&grid, RunBounds::CRUCIBLE)?;
//! assert_eq!(route.cost, 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

pub mod graph;
pub mod grid;
pub mod solver;

pub use graph::{Direction, InvalidRunBounds, MoveGraph, MoveTarget, Orientation, RunBounds};
pub use grid::{Cell, Grid, ParseGridError};
pub use solver::{Route, SolveError, solve};

/// Find the cheapest route from the top-left to the bottom-right cell.
///
/// Builds the move graph for `bounds` and solves corner to corner.
///
/// # Errors
///
/// Returns [`SolveError::NoPath`] if no legal route exists, which can only
/// happen when `bounds.min()` exceeds both grid dimensions minus one.
pub fn minimum_heat_loss(grid: &Grid, bounds: RunBounds) -> Result<Route, SolveError> {
    let graph = MoveGraph::build(grid, bounds);
    solver::solve(&graph, grid.top_left(), grid.bottom_right())
}
