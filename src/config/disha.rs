//! Main DishaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::SearchConfig;

use super::error::ConfigLoadError;
use super::search::SearchSection;

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DishaConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSection,
}

impl DishaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to SearchConfig
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            check_endpoints: self.search.check_endpoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DishaConfig::default();
        assert!(!config.search.check_endpoints);
        assert_eq!(config.to_search_config(), SearchConfig::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = DishaConfig::default();
        config.search.check_endpoints = true;
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = DishaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = DishaConfig::from_yaml("{}").unwrap();
        assert_eq!(config, DishaConfig::default());

        let config = DishaConfig::from_yaml("search: {}").unwrap();
        assert!(!config.search.check_endpoints);
    }

    #[test]
    fn test_parse_error() {
        let err = DishaConfig::from_yaml("search: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }
}
