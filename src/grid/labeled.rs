//! Labeled mazes with embedded start and end markers.
//!
//! A labeled maze marks its start cell with `2` and its end cell with `3`.
//! Extraction records those positions and turns both cells back into open
//! floor, producing a plain [`MazeGrid`] ready for search.

use crate::core::{CellLabel, Position};
use crate::error::{Endpoint, MazeError};

use super::MazeGrid;

/// A grid plus the endpoints to search between
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeProblem {
    pub grid: MazeGrid,
    pub start: Position,
    pub end: Position,
}

/// Raw maze rows that may contain start/end markers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledMaze {
    rows: Vec<Vec<u8>>,
}

impl LabeledMaze {
    /// Wrap raw labeled rows
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Parse an ASCII map (`.` open, `#` wall, `S` start, `E` end)
    pub fn from_ascii(text: &str) -> Result<Self, MazeError> {
        let grid = MazeGrid::from_ascii(text)?;
        Ok(Self::from_rows(grid.rows().to_vec()))
    }

    /// Extract both endpoints from their markers
    pub fn into_problem(self) -> Result<MazeProblem, MazeError> {
        self.into_problem_with(None, None)
    }

    /// Extract endpoints, letting explicit positions take precedence over markers.
    ///
    /// Marker cells are always reset to open, even when overridden.
    pub fn into_problem_with(
        mut self,
        start: Option<Position>,
        end: Option<Position>,
    ) -> Result<MazeProblem, MazeError> {
        if self.rows.iter().all(Vec::is_empty) {
            return Err(MazeError::Empty);
        }

        let mut start_marker = None;
        let mut end_marker = None;

        for (r, row) in self.rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let (slot, endpoint) = match CellLabel::from_u8(*cell) {
                    Some(CellLabel::Start) => (&mut start_marker, Endpoint::Start),
                    Some(CellLabel::End) => (&mut end_marker, Endpoint::End),
                    _ => continue,
                };
                let here =
                    Position::from_indices(r, c).ok_or(MazeError::TooLarge { row: r, col: c })?;
                if let Some(first) = *slot {
                    return Err(MazeError::DuplicateMarker {
                        endpoint,
                        first,
                        second: here,
                    });
                }
                *slot = Some(here);
                *cell = CellLabel::Open as u8;
            }
        }

        let start = start
            .or(start_marker)
            .ok_or(MazeError::MissingMarker(Endpoint::Start))?;
        let end = end
            .or(end_marker)
            .ok_or(MazeError::MissingMarker(Endpoint::End))?;

        Ok(MazeProblem {
            grid: MazeGrid::new(self.rows),
            start,
            end,
        })
    }
}
