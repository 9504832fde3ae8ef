//! Maze grid storage.
//!
//! Rows are stored as-is, so ragged input keeps each row's own length and
//! bounds checks are done per row.

use serde::{Deserialize, Serialize};

use crate::core::{CellLabel, Position};
use crate::error::MazeError;

/// Obstacle map over which the search runs.
///
/// Coordinates are `(row, col)` with `(0, 0)` at the top-left cell. The grid is
/// built up front and only read while a search is running.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MazeGrid {
    rows: Vec<Vec<u8>>,
}

impl MazeGrid {
    /// Create a grid from raw row labels
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Fully open `height` x `width` grid
    pub fn open(height: usize, width: usize) -> Self {
        Self::new(vec![vec![CellLabel::Open as u8; width]; height])
    }

    /// Parse an ASCII map, one row per line (`.` open, `#` wall).
    ///
    /// Blank lines are skipped and surrounding whitespace is trimmed.
    pub fn from_ascii(text: &str) -> Result<Self, MazeError> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_index = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(col, symbol)| {
                    let position = Position::from_indices(row_index, col)
                        .ok_or(MazeError::TooLarge { row: row_index, col })?;
                    CellLabel::from_char(symbol)
                        .map(|label| label as u8)
                        .ok_or(MazeError::UnknownSymbol { symbol, position })
                })
                .collect::<Result<Vec<u8>, MazeError>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(MazeError::Empty);
        }
        Ok(Self::new(rows))
    }

    /// Number of rows
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of a given row, `None` past the last row
    #[inline]
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Number of traversable cells
    pub fn open_cell_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&raw| CellLabel::is_open(raw))
            .count()
    }

    /// Is every row the same length?
    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|pair| pair[0].len() == pair[1].len())
    }

    /// Raw row access
    #[inline]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Check `0 <= row < row_count` and `0 <= col < length of that row`
    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        self.label(position).is_some()
    }

    /// Raw label at `position`, `None` if out of bounds
    #[inline]
    pub fn label(&self, position: Position) -> Option<u8> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    /// Is `position` an open cell? Out-of-bounds positions are not.
    #[inline]
    pub fn is_traversable(&self, position: Position) -> bool {
        self.label(position).is_some_and(CellLabel::is_open)
    }

    /// Overwrite a cell label while building a maze.
    ///
    /// Returns false if `position` is out of bounds.
    pub fn set_label(&mut self, position: Position, label: u8) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(position.row), usize::try_from(position.col))
        else {
            return false;
        };
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = label;
                true
            }
            None => false,
        }
    }

    /// Render as ASCII, one line per row.
    ///
    /// Known labels use their map symbol; any other label renders as `#`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cell_count() + self.row_count());
        for row in &self.rows {
            for &raw in row {
                out.push(CellLabel::from_u8(raw).map_or('#', CellLabel::as_char));
            }
            out.push('\n');
        }
        out
    }
}
