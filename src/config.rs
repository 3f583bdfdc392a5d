//! Configuration for the signature write path.
//!
//! Supports YAML file and environment variable overrides.

use serde::Deserialize;
use std::path::Path;

use crate::coordinator::WriteToggles;

/// Write-path configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store write toggles.
    pub writes: WritesConfig,
}

/// Which store writes are enabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WritesConfig {
    /// Write each signature to the secondary (legacy) store.
    pub secondary: bool,
    /// Write each signature to the primary store.
    pub primary: bool,
    /// Primary-store petition reads use the legacy identity scheme.
    pub legacy_reads: bool,
}

impl Default for WritesConfig {
    fn default() -> Self {
        Self {
            secondary: true,
            primary: true,
            legacy_reads: false,
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("UNDERSIGN_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("UNDERSIGN_SECONDARY_WRITES") {
            if let Ok(b) = v.parse() {
                self.writes.secondary = b;
            }
        }

        if let Ok(v) = std::env::var("UNDERSIGN_PRIMARY_WRITES") {
            if let Ok(b) = v.parse() {
                self.writes.primary = b;
            }
        }

        if let Ok(v) = std::env::var("UNDERSIGN_LEGACY_READS") {
            if let Ok(b) = v.parse() {
                self.writes.legacy_reads = b;
            }
        }
    }

    /// Toggles for constructing a `WriteCoordinator`.
    pub fn write_toggles(&self) -> WriteToggles {
        WriteToggles {
            secondary_writes: self.writes.secondary,
            primary_writes: self.writes.primary,
            primary_reads_use_legacy_ids: self.writes.legacy_reads,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.writes.secondary);
        assert!(config.writes.primary);
        assert!(!config.writes.legacy_reads);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
writes:
  secondary: false
  primary: true
  legacy_reads: true
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.writes.secondary);
        assert!(config.writes.primary);
        assert!(config.writes.legacy_reads);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
writes:
  legacy_reads: true
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.writes.secondary);
        assert!(config.writes.primary);
        assert!(config.writes.legacy_reads);
    }

    #[test]
    fn test_write_toggles_mirror_config() {
        let config: Config = serde_yaml::from_str(
            r#"
writes:
  secondary: false
  legacy_reads: true
"#,
        )
        .unwrap();

        let toggles = config.write_toggles();
        assert!(!toggles.secondary_writes);
        assert!(toggles.primary_writes);
        assert!(toggles.primary_reads_use_legacy_ids);
    }
}
