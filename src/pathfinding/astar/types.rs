//! Directional search types.

use std::cmp::Ordering;

use crate::core::{Direction, Heading, Position};

/// Cost type for g, h and f
pub type Cost = u64;

/// Identity of a search state for dedup: same cell reached with a different
/// heading is a different state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub position: Position,
    pub heading: Heading,
}

/// A node in the directional search.
///
/// `parent` indexes into the arena owned by the running search.
#[derive(Clone, Copy, Debug)]
pub struct SearchState {
    pub position: Position,
    pub heading: Heading,
    pub parent: Option<usize>,
    pub g: Cost, // Steps from start
    pub h: Cost, // Squared Euclidean distance to goal
    pub f: Cost, // g + h
}

impl SearchState {
    /// Unconstrained start state with zero costs
    pub fn start(position: Position) -> Self {
        Self {
            position,
            heading: Heading::Any,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
        }
    }

    /// State reached from `parent` (stored at `parent_index`) by one step in `direction`
    pub fn successor(
        parent: &SearchState,
        parent_index: usize,
        direction: Direction,
        goal: Position,
    ) -> Self {
        let position = parent.position.step(direction);
        let g = parent.g + 1;
        let h = position.squared_distance(&goal);
        Self {
            position,
            heading: Heading::After(direction),
            parent: Some(parent_index),
            g,
            h,
            f: g + h,
        }
    }

    /// Dedup key (position + heading)
    #[inline]
    pub fn key(&self) -> SearchKey {
        SearchKey {
            position: self.position,
            heading: self.heading,
        }
    }

    /// Directions this state may move out of
    #[inline]
    pub fn allowed_directions(&self) -> &'static [Direction] {
        self.heading.allowed_directions()
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SearchState {}

/// Frontier heap entry.
///
/// Lowest `f` first; ties go to the earliest inserted state (lowest arena index).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct FrontierEntry {
    pub f: Cost,
    pub index: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Directional search configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Reject blocked start/goal cells up front.
    ///
    /// Off by default: the start cell is always explorable whatever its
    /// label, and a blocked goal simply ends in `NoPath`.
    pub check_endpoints: bool,
}

impl SearchConfig {
    /// Enable endpoint traversability checks
    pub fn with_endpoint_checks(mut self) -> Self {
        self.check_endpoints = true;
        self
    }
}

/// Result of a directional search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Cells from start to goal inclusive (empty if no path found)
    pub path: Vec<Position>,
    /// Number of moves (path length - 1)
    pub steps: usize,
    /// Number of states finalized during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            steps: 0,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }

    /// The path, or `None` if the search failed
    pub fn into_path(self) -> Option<Vec<Position>> {
        self.success.then_some(self.path)
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start cell is not traversable (only with `check_endpoints`)
    StartBlocked,
    /// Goal cell is not traversable (only with `check_endpoints`)
    GoalBlocked,
    /// Frontier exhausted without reaching the goal
    NoPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_key_distinguishes_heading() {
        let p = Position::new(2, 2);
        let a = SearchKey {
            position: p,
            heading: Heading::After(Direction::North),
        };
        let b = SearchKey {
            position: p,
            heading: Heading::After(Direction::East),
        };
        assert_ne!(a, b);
        assert_eq!(
            a,
            SearchKey {
                position: p,
                heading: Heading::After(Direction::North)
            }
        );
    }

    #[test]
    fn test_successor_costs() {
        let goal = Position::new(0, 2);
        let start = SearchState::start(Position::new(0, 0));
        let next = SearchState::successor(&start, 0, Direction::East, goal);

        assert_eq!(next.position, Position::new(0, 1));
        assert_eq!(next.heading, Heading::After(Direction::East));
        assert_eq!(next.parent, Some(0));
        assert_eq!(next.g, 1);
        assert_eq!(next.h, 1);
        assert_eq!(next.f, 2);
        assert_eq!(
            next.allowed_directions(),
            &[Direction::East, Direction::South]
        );
    }

    #[test]
    fn test_frontier_order() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { f: 5, index: 0 });
        heap.push(FrontierEntry { f: 3, index: 4 });
        heap.push(FrontierEntry { f: 3, index: 2 });
        heap.push(FrontierEntry { f: 7, index: 1 });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.index)).collect();
        assert_eq!(order, vec![2, 4, 0, 1]);
    }

    #[test]
    fn test_failed_result() {
        let result = PathResult::failed(PathFailure::NoPath, 12);
        assert!(!result.success);
        assert_eq!(result.nodes_expanded, 12);
        assert_eq!(result.into_path(), None);
    }
}
