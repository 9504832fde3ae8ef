//! Cardinal directions and the right-turn rule.
//!
//! Directions use (row-delta, col-delta) form with rows growing downward:
//!
//! ```text
//!            North (-1, 0)
//!                 ▲
//!  West (0, -1) ◄─┼─► East (0, 1)
//!                 ▼
//!            South (1, 0)
//! ```
//!
//! A searcher that has just moved in direction `d` may only continue in `d`
//! or in `d.right_turn()`. The turn cycle is South → West → North → East → South.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cardinal unit moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions in expansion order for an unconstrained state.
    ///
    /// The order feeds the frontier tie-break, so it is part of the output contract.
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
    ];

    /// (row-delta, col-delta) of a single step
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Direction for a unit (row, col) delta, `None` for anything non-cardinal
    pub fn from_delta(row: i32, col: i32) -> Option<Self> {
        match (row, col) {
            (-1, 0) => Some(Direction::North),
            (1, 0) => Some(Direction::South),
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            _ => None,
        }
    }

    /// The direction reached by turning right from this one
    #[inline]
    pub fn right_turn(self) -> Self {
        match self {
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::North => Direction::East,
            Direction::East => Direction::South,
        }
    }

    /// Opposite heading
    #[inline]
    pub fn reverse(self) -> Self {
        self.right_turn().right_turn()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

const AFTER_NORTH: [Direction; 2] = [Direction::North, Direction::East];
const AFTER_SOUTH: [Direction; 2] = [Direction::South, Direction::West];
const AFTER_EAST: [Direction; 2] = [Direction::East, Direction::South];
const AFTER_WEST: [Direction; 2] = [Direction::West, Direction::North];

/// The set of directions a search state may move out of.
///
/// The start of a search is unconstrained; every later state remembers the
/// direction that reached it and only allows going straight or turning right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// No move made yet: all four directions allowed
    Any,
    /// Arrived by moving in this direction
    After(Direction),
}

impl Heading {
    /// Allowed directions, in expansion order
    #[inline]
    pub fn allowed_directions(&self) -> &'static [Direction] {
        match self {
            Heading::Any => &Direction::ALL,
            Heading::After(Direction::North) => &AFTER_NORTH,
            Heading::After(Direction::South) => &AFTER_SOUTH,
            Heading::After(Direction::East) => &AFTER_EAST,
            Heading::After(Direction::West) => &AFTER_WEST,
        }
    }

    /// Is a move in `direction` legal from this heading?
    #[inline]
    pub fn permits(&self, direction: Direction) -> bool {
        self.allowed_directions().contains(&direction)
    }
}
