//! Path planning on maze grids.
//!
//! - **Directional search**: shortest-step search where each move must go
//!   straight or turn right relative to the previous one
//! - **Validation**: check any path against the grid and the turn rule
//!
//! ## Directional search
//!
//! ```rust
//! use disha_path::core::Position;
//! use disha_path::grid::MazeGrid;
//! use disha_path::pathfinding::{DirectionalPlanner, SearchConfig};
//!
//! let grid = MazeGrid::open(10, 10);
//! let planner = DirectionalPlanner::new(&grid, SearchConfig::default());
//!
//! let result = planner.find_path(Position::new(0, 0), Position::new(0, 2)).unwrap();
//! if result.success {
//!     println!("Path found with {} steps", result.steps);
//! }
//! ```

pub mod astar;
pub mod validate;

pub use astar::{
    DirectionalPlanner, PathFailure, PathResult, SearchConfig, path_exists, solve,
};

pub use validate::{PathViolation, step_directions, validate_path};
