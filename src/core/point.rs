//! Cell position type for maze grids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::Direction;

/// Maze cell position (0-indexed row and column).
///
/// Serialized as a `[row, col]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Position {
    /// Row index (grows downward)
    pub row: i32,
    /// Column index (grows to the right)
    pub col: i32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position from row/column indices, `None` if either exceeds `i32::MAX`
    pub fn from_indices(row: usize, col: usize) -> Option<Self> {
        Some(Self::new(i32::try_from(row).ok()?, i32::try_from(col).ok()?))
    }

    /// Neighbor one step away in `direction`
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }

    /// Squared Euclidean distance (Δrow² + Δcol²)
    #[inline]
    pub fn squared_distance(&self, other: &Position) -> u64 {
        let dr = (self.row - other.row).unsigned_abs() as u64;
        let dc = (self.col - other.col).unsigned_abs() as u64;
        dr * dr + dc * dc
    }

    /// Direction of a single cardinal step to `next`, if it is one
    #[inline]
    pub fn direction_to(&self, next: &Position) -> Option<Direction> {
        Direction::from_delta(next.row - self.row, next.col - self.col)
    }
}

impl Add<Direction> for Position {
    type Output = Self;

    #[inline]
    fn add(self, direction: Direction) -> Self {
        self.step(direction)
    }
}

impl From<[i32; 2]> for Position {
    fn from([row, col]: [i32; 2]) -> Self {
        Position::new(row, col)
    }
}

impl From<Position> for [i32; 2] {
    fn from(p: Position) -> Self {
        [p.row, p.col]
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
