//! YAML configuration for patclass.
//!
//! Names the wanted classifications and how the binary logs. Loaded once at
//! startup and handed to [`ClassificationMatch::from_config`](crate::ClassificationMatch::from_config).
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "video-coding"
//!
//! wanted:
//!   - scheme: cpc
//!     section: "H"
//!     main_class: "04"
//!     sub_class: "N"
//!     main_group: "21"
//!   - scheme: uspc
//!     main_class: "705"
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```
//!
//! Field contents of the wanted codes are not checked here. An empty field is
//! reported by `setup()` as a build error, the same way it would be for codes
//! supplied programmatically.

use std::fs;
use std::path::Path;

use classification::ClassificationCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PatclassConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Wanted classifications, in the order they should be tried.
    pub wanted: Vec<ClassificationCode>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PatclassConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PatclassConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.wanted.is_empty() {
            return Err(ConfigLoadError::Validation(
                "wanted must list at least one classification".to_string(),
            ));
        }

        self.logging.validate()
    }
}

/// Logging settings for the `patclass` binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
