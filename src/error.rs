//! Error types for disha-path.
//!
//! "No path" is a normal search outcome and is not represented here.

use std::fmt;

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::Position;

/// Which end of a search request an error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Invalid search request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("{endpoint} position {position} is outside the grid")]
    OutOfBounds {
        endpoint: Endpoint,
        position: Position,
    },
}

/// Malformed maze description
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,

    #[error("unknown map symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },

    #[error("no {0} marker and no explicit {0} position")]
    MissingMarker(Endpoint),

    #[error("cell ({row}, {col}) is beyond the addressable grid size")]
    TooLarge { row: usize, col: usize },

    #[error("{endpoint} marker appears more than once ({first} and {second})")]
    DuplicateMarker {
        endpoint: Endpoint,
        first: Position,
        second: Position,
    },
}

/// Top-level error type
#[derive(Error, Debug)]
pub enum DishaError {
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

pub type Result<T> = std::result::Result<T, DishaError>;
