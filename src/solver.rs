//! Dijkstra search over the move graph's `(cell, orientation)` states.
//!
//! A state records the axis of the run that arrived at a cell, so expanding
//! a state only considers the perpendicular axis's runs. The frontier is a
//! binary min-heap keyed by accumulated cost: every edge cost is
//! non-negative, so the first time a state (or the destination cell) is
//! popped, its cost is optimal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use thiserror::Error;

use crate::graph::{MoveGraph, Orientation};
use crate::grid::Cell;

/// The search could not produce a route.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("cell {0} is outside the graph")]
    OutOfBounds(Cell),

    /// The work queue drained without reaching the destination. On a
    /// rectangular grid this only happens when the minimum run length is
    /// longer than both grid dimensions allow, so for well-formed inputs it
    /// signals a defect rather than a user error.
    #[error("no legal route reaches {end}")]
    NoPath { end: Cell },
}

/// A cheapest route through the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Total cost of every cell the route enters.
    pub cost: u64,
    /// The endpoints of each run, from start to end inclusive. Consecutive
    /// cells differ along alternating axes.
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct SearchState {
    cell: Cell,
    /// The axis of the run that arrived here; the next run must use the
    /// other axis.
    orientation: Orientation,
}

/// A frontier entry, ordered as a min-heap on accumulated cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: u64,
    state: SearchState,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // flip cost comparison for min-heap behavior
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-cost route from `start` to `end`.
///
/// `start` seeds both orientations at cost 0, since no run has committed an
/// axis yet; the result takes whichever orientation reaches `end` cheapest.
///
/// # Errors
///
/// Returns [`SolveError::OutOfBounds`] if either endpoint lies outside the
/// graph, and [`SolveError::NoPath`] if `end` is unreachable.
pub fn solve(graph: &MoveGraph, start: Cell, end: Cell) -> Result<Route, SolveError> {
    for cell in [start, end] {
        if !graph.contains(cell) {
            return Err(SolveError::OutOfBounds(cell));
        }
    }

    let mut best: HashMap<SearchState, u64> = HashMap::new();
    let mut predecessor: HashMap<SearchState, SearchState> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    for orientation in Orientation::BOTH {
        let state = SearchState {
            cell: start,
            orientation,
        };
        best.insert(state, 0);
        frontier.push(QueueEntry { cost: 0, state });
    }

    while let Some(QueueEntry { cost, state }) = frontier.pop() {
        // a cheaper cost was recorded after this entry was queued
        if best.get(&state).is_some_and(|&known| cost > known) {
            continue;
        }

        if state.cell == end {
            return Ok(reconstruct(&predecessor, state, cost));
        }

        let outgoing = state.orientation.perpendicular();
        for target in graph.moves(state.cell, outgoing) {
            let next = SearchState {
                cell: target.dest,
                orientation: outgoing,
            };
            let next_cost = cost + target.cost;

            if best.get(&next).is_none_or(|&known| next_cost < known) {
                best.insert(next, next_cost);
                predecessor.insert(next, state);
                frontier.push(QueueEntry {
                    cost: next_cost,
                    state: next,
                });
            }
        }
    }

    Err(SolveError::NoPath { end })
}

/// Walk predecessor links back from the final state to the start.
fn reconstruct(
    predecessor: &HashMap<SearchState, SearchState>,
    end: SearchState,
    cost: u64,
) -> Route {
    let mut cells = vec![end.cell];
    let mut state = end;
    while let Some(&previous) = predecessor.get(&state) {
        state = previous;
        cells.push(state.cell);
    }
    cells.reverse();
    Route { cost, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RunBounds;
    use crate::grid::Grid;

    fn parse(text: &str) -> Grid {
        text.parse().expect("test grid parses")
    }

    fn solve_corners(grid: &Grid, bounds: RunBounds) -> Result<Route, SolveError> {
        let graph = MoveGraph::build(grid, bounds);
        solve(&graph, grid.top_left(), grid.bottom_right())
    }

    /// Check a route is well-formed: starts and ends where expected, runs
    /// alternate axes and respect the bounds, and segment costs sum to the
    /// reported total.
    fn assert_route_legal(grid: &Grid, bounds: RunBounds, route: &Route, start: Cell, end: Cell) {
        assert_eq!(route.cells.first(), Some(&start));
        assert_eq!(route.cells.last(), Some(&end));

        let mut total = 0u64;
        let mut last_axis: Option<Orientation> = None;
        for pair in route.cells.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let axis = if from.row == to.row {
                Orientation::Horizontal
            } else {
                assert_eq!(from.col, to.col, "runs must be axis-aligned");
                Orientation::Vertical
            };
            assert_ne!(last_axis, Some(axis), "consecutive runs must alternate");
            last_axis = Some(axis);

            let run = from.row.abs_diff(to.row) + from.col.abs_diff(to.col);
            let run_length = u32::try_from(run).expect("run length fits u32");
            assert!(run_length >= bounds.min() && run_length <= bounds.max());

            // sum the entered cells, origin excluded
            for step in 1..=run {
                let cell = match axis {
                    Orientation::Horizontal if to.col > from.col => {
                        Cell::new(from.row, from.col + step)
                    }
                    Orientation::Horizontal => Cell::new(from.row, from.col - step),
                    Orientation::Vertical if to.row > from.row => {
                        Cell::new(from.row + step, from.col)
                    }
                    Orientation::Vertical => Cell::new(from.row - step, from.col),
                };
                total += u64::from(grid.cost(cell));
            }
        }
        assert_eq!(total, route.cost);
    }

    #[test]
    fn single_cell_grid_costs_nothing() {
        let grid = parse("9");
        let route = solve_corners(&grid, RunBounds::CRUCIBLE).expect("route exists");
        assert_eq!(route.cost, 0);
        assert_eq!(route.cells, vec![Cell::new(0, 0)]);
    }

    #[test]
    fn two_by_two_prefers_cheap_detour() {
        let grid = parse("24\n32");
        let route = solve_corners(&grid, RunBounds::CRUCIBLE).expect("route exists");
        assert_eq!(route.cost, 5);
        assert_route_legal(
            &grid,
            RunBounds::CRUCIBLE,
            &route,
            Cell::new(0, 0),
            Cell::new(1, 1),
        );
    }

    #[test]
    fn three_by_three_takes_the_border() {
        let grid = parse("245\n325\n123");
        let route = solve_corners(&grid, RunBounds::CRUCIBLE).expect("route exists");
        assert_eq!(route.cost, 9);
    }

    #[test]
    fn forced_turns_cost_extra() {
        // a straight line of 4 east is illegal under max 3, so the route
        // must dip into the expensive second row
        let grid = parse("23331\n99999");
        let route = solve_corners(&grid, RunBounds::CRUCIBLE).expect("route exists");
        assert_eq!(route.cost, 27);
        assert_route_legal(
            &grid,
            RunBounds::CRUCIBLE,
            &route,
            Cell::new(0, 0),
            Cell::new(1, 4),
        );
    }

    #[test]
    fn wide_grid_matches_known_answer() {
        let grid = parse("241343231\n321545353\n325524565");
        let route = solve_corners(&grid, RunBounds::CRUCIBLE).expect("route exists");
        assert_eq!(route.cost, 37);
        assert_route_legal(
            &grid,
            RunBounds::CRUCIBLE,
            &route,
            Cell::new(0, 0),
            Cell::new(2, 8),
        );
    }

    #[test]
    fn unreachable_end_is_an_error() {
        // the minimum run overshoots a 2x2 grid in every direction
        let grid = parse("24\n32");
        let result = solve_corners(&grid, RunBounds::ULTRA);
        assert!(matches!(
            result,
            Err(SolveError::NoPath {
                end: Cell { row: 1, col: 1 }
            })
        ));
    }

    #[test]
    fn endpoints_outside_graph_are_rejected() {
        let grid = parse("24\n32");
        let graph = MoveGraph::build(&grid, RunBounds::CRUCIBLE);
        let outside = Cell::new(5, 0);
        let result = solve(&graph, grid.top_left(), outside);
        assert!(matches!(
            result,
            Err(SolveError::OutOfBounds(Cell { row: 5, col: 0 }))
        ));
    }

    #[test]
    fn start_equal_to_end_short_circuits() {
        let grid = parse("245\n325\n123");
        let graph = MoveGraph::build(&grid, RunBounds::CRUCIBLE);
        let here = Cell::new(1, 1);
        let route = solve(&graph, here, here).expect("trivial route exists");
        assert_eq!(route.cost, 0);
        assert_eq!(route.cells, vec![here]);
    }

    #[test]
    fn ultra_route_is_legal() {
        let grid = parse(
            "\
111111111111
999999999991
999999999991
999999999991
999999999991",
        );
        let route = solve_corners(&grid, RunBounds::ULTRA).expect("route exists");
        assert_eq!(route.cost, 71);
        assert_route_legal(
            &grid,
            RunBounds::ULTRA,
            &route,
            Cell::new(0, 0),
            Cell::new(4, 11),
        );
    }
}
