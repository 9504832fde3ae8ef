//! Directional planner implementation.

use crate::core::Position;
use crate::error::{Endpoint, SolveError};
use crate::grid::MazeGrid;
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::types::{
    Cost, FrontierEntry, PathFailure, PathResult, SearchConfig, SearchKey, SearchState,
};

/// Best-first pathfinder honoring the straight-or-right-turn rule
pub struct DirectionalPlanner<'a> {
    grid: &'a MazeGrid,
    config: SearchConfig,
}

impl<'a> DirectionalPlanner<'a> {
    /// Create a new planner
    pub fn new(grid: &'a MazeGrid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a MazeGrid) -> Self {
        Self::new(grid, SearchConfig::default())
    }

    /// Find a path from start to goal.
    ///
    /// Out-of-bounds endpoints are an error. Unreachability is reported
    /// through [`PathResult::failure_reason`].
    pub fn find_path(&self, start: Position, goal: Position) -> Result<PathResult, SolveError> {
        trace!("[Directional] find_path: start={} goal={}", start, goal);

        self.check_bounds(start, Endpoint::Start)?;
        self.check_bounds(goal, Endpoint::End)?;

        if self.config.check_endpoints {
            if !self.grid.is_traversable(start) {
                debug!("[Directional] FAILED: StartBlocked at {}", start);
                return Ok(PathResult::failed(PathFailure::StartBlocked, 0));
            }
            if !self.grid.is_traversable(goal) {
                debug!("[Directional] FAILED: GoalBlocked at {}", goal);
                return Ok(PathResult::failed(PathFailure::GoalBlocked, 0));
            }
        }

        // Every state ever put on the frontier lives here; parents are indices.
        let mut arena: Vec<SearchState> = vec![SearchState::start(start)];
        let mut open_set = BinaryHeap::new();
        let mut closed_set: HashSet<SearchKey> = HashSet::new();
        // Lowest f queued per key. Entries for a key only ever get better, so
        // the latest insert is the best one still open.
        let mut best_open: HashMap<SearchKey, Cost> = HashMap::new();

        open_set.push(FrontierEntry { f: 0, index: 0 });
        best_open.insert(arena[0].key(), 0);

        let mut nodes_expanded = 0;

        while let Some(entry) = open_set.pop() {
            let current = arena[entry.index];

            // A better copy of this state was already finalized
            if !closed_set.insert(current.key()) {
                continue;
            }
            nodes_expanded += 1;

            if current.position == goal {
                return Ok(self.reconstruct_path(&arena, entry.index, nodes_expanded));
            }

            for &direction in current.allowed_directions() {
                let next = current.position.step(direction);
                if !self.grid.in_bounds(next) || !self.grid.is_traversable(next) {
                    continue;
                }

                let child = SearchState::successor(&current, entry.index, direction, goal);
                let key = child.key();

                if closed_set.contains(&key) {
                    continue;
                }
                if best_open.get(&key).is_some_and(|&f| f <= child.f) {
                    continue;
                }

                // A dominated copy may remain queued; it is skipped when popped.
                best_open.insert(key, child.f);
                open_set.push(FrontierEntry {
                    f: child.f,
                    index: arena.len(),
                });
                arena.push(child);
            }
        }

        debug!(
            "[Directional] FAILED: NoPath after expanding {} states",
            nodes_expanded
        );
        Ok(PathResult::failed(PathFailure::NoPath, nodes_expanded))
    }

    fn check_bounds(&self, position: Position, endpoint: Endpoint) -> Result<(), SolveError> {
        if self.grid.in_bounds(position) {
            return Ok(());
        }
        debug!(
            "[Directional] FAILED: OutOfBounds - {} {} outside grid",
            endpoint, position
        );
        Err(SolveError::OutOfBounds { endpoint, position })
    }

    /// Walk parent links back from the goal state
    fn reconstruct_path(
        &self,
        arena: &[SearchState],
        goal_index: usize,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path = Vec::with_capacity(arena[goal_index].g as usize + 1);
        let mut current = Some(goal_index);

        while let Some(index) = current {
            path.push(arena[index].position);
            current = arena[index].parent;
        }
        path.reverse();

        let steps = path.len() - 1;
        trace!(
            "[Directional] SUCCESS: path length={} cells, steps={}, nodes_expanded={}",
            path.len(),
            steps,
            nodes_expanded
        );

        PathResult {
            path,
            steps,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
