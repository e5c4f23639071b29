/// Configuration file support for BURRO vehicles
///
/// Allows drive-loop settings to come from TOML/YAML config files instead of
/// hardcoded arguments. File format is auto-detected from the extension.
use crate::error::{BurroError, BurroResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_rate_hz() -> f64 {
    10.0
}

fn default_warmup_ms() -> u64 {
    1000
}

/// Drive-loop settings for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Target cycle frequency in Hz. The achieved rate is at most this.
    #[serde(default = "default_rate_hz")]
    pub rate_hz: f64,

    /// Optional cycle limit; the loop stops once the count exceeds it.
    /// Mostly useful for test drives.
    #[serde(default)]
    pub max_loop_count: Option<u64>,

    /// Delay in milliseconds between starting background workers and the
    /// first cycle, so workers can produce an initial result.
    #[serde(default = "default_warmup_ms")]
    pub warmup_ms: u64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        VehicleConfig {
            rate_hz: default_rate_hz(),
            max_loop_count: None,
            warmup_ms: default_warmup_ms(),
        }
    }
}

impl VehicleConfig {
    /// Load config from a file (auto-detect format)
    pub fn from_file<P: AsRef<Path>>(path: P) -> BurroResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BurroError::config(format!("Failed to read config file: {}", e)))?;

        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("toml") => Self::from_toml(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            _ => Self::from_toml(&contents).or_else(|_| Self::from_yaml(&contents)),
        }
    }

    /// Parse config from TOML string
    pub fn from_toml(contents: &str) -> BurroResult<Self> {
        toml::from_str(contents)
            .map_err(|e| BurroError::config(format!("Failed to parse TOML: {}", e)))
    }

    /// Parse config from YAML string
    pub fn from_yaml(contents: &str) -> BurroResult<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| BurroError::config(format!("Failed to parse YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            rate_hz = 20.0
            max_loop_count = 100
            warmup_ms = 250
        "#;

        let config = VehicleConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.rate_hz, 20.0);
        assert_eq!(config.max_loop_count, Some(100));
        assert_eq!(config.warmup_ms, 250);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml_str = r#"
            rate_hz: 50.0
        "#;

        let config = VehicleConfig::from_yaml(yaml_str).unwrap();
        assert_eq!(config.rate_hz, 50.0);
        assert_eq!(config.max_loop_count, None);
        assert_eq!(config.warmup_ms, 1000);
    }

    #[test]
    fn test_defaults() {
        let config = VehicleConfig::from_toml("").unwrap();
        assert_eq!(config.rate_hz, 10.0);
        assert_eq!(config.max_loop_count, None);
        assert_eq!(config.warmup_ms, 1000);
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let result = VehicleConfig::from_toml("rate_hz = \"fast\"");
        assert!(matches!(result, Err(BurroError::Config(_))));
    }
}
