//! Maze grid model.
//!
//! - [`MazeGrid`]: read-only obstacle map with per-row bounds checks
//! - [`LabeledMaze`]: maze rows carrying start/end markers

mod labeled;
mod storage;

pub use labeled::{LabeledMaze, MazeProblem};
pub use storage::MazeGrid;
