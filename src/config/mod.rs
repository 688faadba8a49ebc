// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Application configuration.
//!
//! Loads display strings and UI options from a TOML file. The strings
//! table is how the host supplies localized text for generated titles
//! and voice labels; every field has an English default so a config
//! file is optional and may be partial.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config file could not be serialized
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A value is out of range or empty
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Display strings
    #[serde(default)]
    pub strings: Strings,
    /// UI options
    #[serde(default)]
    pub ui: UiOptions,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml = self.to_toml()?;
        fs::write(path.as_ref(), toml).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strings.default_part_title.is_empty() {
            return Err(ConfigError::Invalid(
                "strings.default_part_title must not be empty".to_string(),
            ));
        }
        if self.strings.copy_suffix.is_empty() {
            return Err(ConfigError::Invalid(
                "strings.copy_suffix must not be empty".to_string(),
            ));
        }
        if !(1..=120).contains(&self.ui.frame_rate) {
            return Err(ConfigError::Invalid(format!(
                "ui.frame_rate must be between 1 and 120, got {}",
                self.ui.frame_rate
            )));
        }
        Ok(())
    }
}

/// Display strings for generated titles and voice labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Strings {
    /// Title given to a freshly created part
    #[serde(default = "default_part_title")]
    pub default_part_title: String,
    /// Suffix appended to a duplicated part's title
    #[serde(default = "default_copy_suffix")]
    pub copy_suffix: String,
    /// Voices label when no voice is visible
    #[serde(default = "default_voices_none")]
    pub voices_none: String,
    /// Voices label when every voice is visible
    #[serde(default = "default_voices_all")]
    pub voices_all: String,
}

fn default_part_title() -> String {
    "Part".to_string()
}
fn default_copy_suffix() -> String {
    " (copy)".to_string()
}
fn default_voices_none() -> String {
    "None".to_string()
}
fn default_voices_all() -> String {
    "All".to_string()
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            default_part_title: default_part_title(),
            copy_suffix: default_copy_suffix(),
            voices_none: default_voices_none(),
            voices_all: default_voices_all(),
        }
    }
}

/// UI options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiOptions {
    /// Target frame rate for the terminal UI
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Require a second keypress to confirm removing parts
    #[serde(default)]
    pub confirm_remove: bool,
}

fn default_frame_rate() -> u32 {
    30
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            confirm_remove: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.strings.default_part_title, "Part");
        assert_eq!(config.strings.copy_suffix, " (copy)");
        assert_eq!(config.strings.voices_none, "None");
        assert_eq!(config.strings.voices_all, "All");
        assert_eq!(config.ui.frame_rate, 30);
        assert!(!config.ui.confirm_remove);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml = r#"
            [strings]
            default_part_title = "Stimme"

            [ui]
            confirm_remove = true
        "#;

        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.strings.default_part_title, "Stimme");
        assert_eq!(config.strings.voices_all, "All");
        assert!(config.ui.confirm_remove);
        assert_eq!(config.ui.frame_rate, 30);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_frame_rate_rejected() {
        let toml = r#"
            [ui]
            frame_rate = 0
        "#;
        assert!(matches!(
            AppConfig::from_toml(toml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_empty_string_rejected() {
        let toml = r#"
            [strings]
            default_part_title = ""
        "#;
        assert!(matches!(
            AppConfig::from_toml(toml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("not toml at all ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partbook.toml");

        let mut config = AppConfig::default();
        config.strings.default_part_title = "Parte".to_string();
        config.ui.frame_rate = 60;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            AppConfig::load("/nonexistent/partbook.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
