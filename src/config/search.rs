//! Search configuration section.

use serde::{Deserialize, Serialize};

/// Directional search settings
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchSection {
    /// Fail fast on blocked start/goal cells instead of searching
    #[serde(default)]
    pub check_endpoints: bool,
}
