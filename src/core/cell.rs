//! Cell labels for maze grids.
//!
//! A maze is stored as raw `u8` labels. Only [`CellLabel::Open`] (0) is
//! traversable; every other value blocks movement. Labeled mazes also carry
//! start and end markers, which are replaced with open cells before solving.

use serde::{Deserialize, Serialize};

/// Known cell label values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellLabel {
    /// Traversable cell
    #[default]
    Open = 0,

    /// Blocked cell
    Wall = 1,

    /// Start marker (labeled mazes only)
    Start = 2,

    /// End marker (labeled mazes only)
    End = 3,
}

impl CellLabel {
    /// Can the searcher enter a cell carrying this raw label?
    #[inline]
    pub fn is_open(raw: u8) -> bool {
        raw == CellLabel::Open as u8
    }

    /// Convert from a raw label, `None` for values outside the known set
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CellLabel::Open),
            1 => Some(CellLabel::Wall),
            2 => Some(CellLabel::Start),
            3 => Some(CellLabel::End),
            _ => None,
        }
    }

    /// Parse an ASCII map symbol
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '0' => Some(CellLabel::Open),
            '#' | '1' => Some(CellLabel::Wall),
            'S' | '2' => Some(CellLabel::Start),
            'E' | '3' => Some(CellLabel::End),
            _ => None,
        }
    }

    /// Map symbol, the inverse of `from_char`
    pub fn as_char(self) -> char {
        match self {
            CellLabel::Open => '.',
            CellLabel::Wall => '#',
            CellLabel::Start => 'S',
            CellLabel::End => 'E',
        }
    }
}
