//! Navigator integration configuration

use serde::{Deserialize, Serialize};

/// The URL scheme registered by the ArcGIS Navigator app
pub const NAVIGATOR_SCHEME: &str = "arcgis-navigator:";

/// Configuration for the Navigator deep-link builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// URL scheme of the target Navigator handler, including the trailing `:`
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

fn default_scheme() -> String {
    NAVIGATOR_SCHEME.to_string()
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
        }
    }
}

impl NavigatorConfig {
    /// Create a configuration suitable for testing
    ///
    /// Points links at a test scheme so accidental opens never reach the
    /// real Navigator app.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            scheme: "arcgis-navigator-test:".to_string(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.scheme.is_empty() {
            return Err("scheme must not be empty".to_string());
        }

        if !self.scheme.ends_with(':') {
            return Err("scheme must end with ':'".to_string());
        }

        if self.scheme.len() == 1 {
            return Err("scheme must have a name before ':'".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavigatorConfig::default();
        assert_eq!(config.scheme, "arcgis-navigator:");
    }

    #[test]
    fn test_testing_config() {
        let config = NavigatorConfig::for_testing();
        assert_ne!(config.scheme, NAVIGATOR_SCHEME);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_success() {
        let config = NavigatorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_scheme() {
        let config = NavigatorConfig {
            scheme: String::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_colon() {
        let config = NavigatorConfig {
            scheme: "arcgis-navigator".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bare_colon() {
        let config = NavigatorConfig {
            scheme: ":".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = NavigatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: NavigatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.scheme, config.scheme);
    }

    #[test]
    fn test_missing_field_uses_default_scheme() {
        let deserialized: NavigatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(deserialized.scheme, NAVIGATOR_SCHEME);
    }
}
