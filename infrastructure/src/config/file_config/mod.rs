//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod client;
mod detection;
mod output;
mod script;
mod store;

pub use client::FileClientConfig;
pub use detection::FileDetectionConfig;
pub use output::FileOutputConfig;
pub use script::FileScriptConfig;
pub use store::FileStoreConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("client.poll_interval_ms cannot be 0")]
    ZeroPollInterval,

    #[error("client.max_attempts cannot be 0")]
    ZeroMaxAttempts,

    #[error("detection.known_options contains an empty key")]
    EmptyOptionKey,

    #[error("detection.known_options cannot be empty")]
    EmptyKnownOptions,

    #[error("detection.{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("script.{0} cannot be empty")]
    EmptyScriptField(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Option store location
    pub store: FileStoreConfig,
    /// Detection sources
    pub detection: FileDetectionConfig,
    /// Browser client timing
    pub client: FileClientConfig,
    /// Consent script asset
    pub script: FileScriptConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        issues.extend(self.detection.validate());
        issues.extend(self.client.validate());
        issues.extend(self.script.validate());
        issues
    }
}
