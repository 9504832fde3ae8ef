//! # Disha-Path: Direction-Constrained Maze Search
//!
//! Shortest-path search over 2D grid mazes where the searcher may only go
//! straight or turn right after each move. Left turns and reversals are
//! never allowed, so a goal that is reachable on an ordinary 4-connected grid
//! can still be unreachable here.
//!
//! ## Quick Start
//!
//! ```rust
//! use disha_path::{MazeGrid, Position, solve};
//!
//! let grid = MazeGrid::new(vec![
//!     vec![0, 0],
//!     vec![1, 0],
//! ]);
//!
//! // East then south: a right turn
//! let path = solve(&grid, Position::new(0, 0), Position::new(1, 1)).unwrap();
//! assert_eq!(path.map(|p| p.len()), Some(3));
//!
//! // North then west would be a left turn
//! let path = solve(&grid, Position::new(1, 1), Position::new(0, 0)).unwrap();
//! assert!(path.is_none());
//! ```
//!
//! ## Coordinate Frame
//!
//! Positions are `(row, col)` with `(0, 0)` at the top-left cell:
//! - **North**: row - 1
//! - **South**: row + 1
//! - **East**: col + 1
//! - **West**: col - 1
//!
//! Right turns cycle South → West → North → East → South.
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (Position, Direction, Heading, CellLabel)
//! - [`grid`]: Maze grid model and labeled-maze endpoint extraction
//! - [`pathfinding`]: Directional search and path validation
//! - [`config`]: YAML configuration and maze scenario files
//! - [`error`]: Error types
//!
//! ## Search
//!
//! ```text
//!   MazeGrid ──┐
//!              ▼
//!   ┌─────────────────────┐     pop lowest f      ┌────────────────┐
//!   │  Frontier (heap)    │──────────────────────►│  Closed set    │
//!   │  (f, insert order)  │                       │ (cell, heading)│
//!   └─────────▲───────────┘                       └───────┬────────┘
//!             │  straight / right-turn successors         │
//!             └───────────────────────────────────────────┘
//!                               │ goal popped
//!                               ▼
//!                     parent indices → path
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::{ConfigLoadError, DishaConfig, MazeFile, MazeScenario};
pub use crate::core::{CellLabel, Direction, Heading, Position};
pub use error::{DishaError, Endpoint, MazeError, Result, SolveError};
pub use grid::{LabeledMaze, MazeGrid, MazeProblem};
pub use pathfinding::{
    DirectionalPlanner, PathFailure, PathResult, PathViolation, SearchConfig, path_exists, solve,
    step_directions, validate_path,
};
