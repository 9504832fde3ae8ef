//! Maze scenario files.
//!
//! ```yaml
//! mazes:
//!   - name: "corner"
//!     start: [0, 0]
//!     end: [1, 1]
//!     grid:
//!       - [0, 0]
//!       - [1, 0]
//! ```
//!
//! `start` and `end` may be omitted when the grid carries `2`/`3` markers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::error::MazeError;
use crate::grid::{LabeledMaze, MazeProblem};

use super::error::ConfigLoadError;

/// A named maze with its endpoints
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MazeScenario {
    /// Scenario name (used in output)
    pub name: String,
    /// Start position, or taken from the `2` marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    /// End position, or taken from the `3` marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
    /// Raw cell labels, one list per row
    pub grid: Vec<Vec<u8>>,
}

impl MazeScenario {
    /// Build the search problem, resolving markers
    pub fn to_problem(&self) -> Result<MazeProblem, MazeError> {
        LabeledMaze::from_rows(self.grid.clone()).into_problem_with(self.start, self.end)
    }
}

/// A collection of maze scenarios
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MazeFile {
    #[serde(default)]
    pub mazes: Vec<MazeScenario>,
}

impl MazeFile {
    /// Load scenarios from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Find a scenario by name
    pub fn get(&self, name: &str) -> Option<&MazeScenario> {
        self.mazes.iter().find(|m| m.name == name)
    }
}
