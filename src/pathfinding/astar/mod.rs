//! Direction-constrained best-first search.
//!
//! Implements an A*-style search where the moves available from a cell depend
//! on how the cell was reached:
//! - The start state may move in any of the four cardinal directions
//! - Every later state may only go straight or turn right
//! - States are deduplicated on (cell, heading), so one cell can be visited
//!   once per arrival direction
//!
//! Ordering uses `f = g + h` with unit step cost and squared Euclidean
//! distance as `h`. Equal `f` values resolve to the state queued first,
//! which makes the returned path deterministic.

mod planner;
mod types;

pub use planner::DirectionalPlanner;
pub use types::{Cost, PathFailure, PathResult, SearchConfig, SearchKey, SearchState};

use crate::core::Position;
use crate::error::SolveError;
use crate::grid::MazeGrid;

/// Find a path with default configuration.
///
/// Returns `Ok(None)` when no path satisfies the movement rule.
pub fn solve(
    grid: &MazeGrid,
    start: Position,
    end: Position,
) -> Result<Option<Vec<Position>>, SolveError> {
    let planner = DirectionalPlanner::with_defaults(grid);
    Ok(planner.find_path(start, end)?.into_path())
}

/// Check if a path exists. Out-of-bounds endpoints count as unreachable.
pub fn path_exists(grid: &MazeGrid, start: Position, end: Position) -> bool {
    matches!(solve(grid, start, end), Ok(Some(_)))
}
