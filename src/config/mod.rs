//! Configuration and maze file loading.
//!
//! Both are YAML documents parsed with serde.

mod disha;
mod error;
mod mazes;
mod search;

pub use disha::DishaConfig;
pub use error::ConfigLoadError;
pub use mazes::{MazeFile, MazeScenario};
pub use search::SearchSection;
