//! Configuration loading errors.

use thiserror::Error;

/// Failure to read or parse a YAML document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
