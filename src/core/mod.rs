//! Core types for direction-constrained maze search.
//!
//! - [`Position`]: (row, col) cell coordinates
//! - [`Direction`] and [`Heading`]: cardinal moves and the straight-or-right rule
//! - [`CellLabel`]: raw maze cell labels

mod cell;
mod direction;
mod point;

pub use cell::CellLabel;
pub use direction::{Direction, Heading};
pub use point::Position;
