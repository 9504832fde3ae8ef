//! Path checks against the grid and the straight-or-right-turn rule.

use thiserror::Error;

use crate::core::{Direction, Heading, Position};
use crate::grid::MazeGrid;

/// First rule a path breaks. `index` is the offending cell in the path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathViolation {
    #[error("path is empty")]
    Empty,

    #[error("step into cell {index} is not a single cardinal move")]
    NotCardinal { index: usize },

    #[error("cell {index} is blocked or outside the grid")]
    Blocked { index: usize },

    #[error("step into cell {index} turns from {from} to {to}")]
    IllegalTurn {
        index: usize,
        from: Direction,
        to: Direction,
    },
}

/// Check that `path` is a legal route over `grid`.
///
/// The first cell is not checked for traversability, matching search
/// behavior where the start cell is always explorable.
pub fn validate_path(grid: &MazeGrid, path: &[Position]) -> Result<(), PathViolation> {
    if path.is_empty() {
        return Err(PathViolation::Empty);
    }

    let mut heading = Heading::Any;
    for (i, pair) in path.windows(2).enumerate() {
        let index = i + 1;
        let direction = pair[0]
            .direction_to(&pair[1])
            .ok_or(PathViolation::NotCardinal { index })?;

        if !grid.is_traversable(pair[1]) {
            return Err(PathViolation::Blocked { index });
        }

        match heading {
            Heading::After(previous) if !heading.permits(direction) => {
                return Err(PathViolation::IllegalTurn {
                    index,
                    from: previous,
                    to: direction,
                });
            }
            _ => {}
        }
        heading = Heading::After(direction);
    }

    Ok(())
}

/// Directions of each step in `path` (one fewer than the cell count)
pub fn step_directions(path: &[Position]) -> Vec<Option<Direction>> {
    path.windows(2)
        .map(|pair| pair[0].direction_to(&pair[1]))
        .collect()
}
