//! Configuration file loading for clarity-consent-auto
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CLARITY_CONSENT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./clarity-consent.toml` or `./.clarity-consent.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/clarity-consent-auto/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClientConfig, FileConfig, FileDetectionConfig, FileOutputConfig,
    FileScriptConfig, FileStoreConfig,
};
pub use loader::ConfigLoader;
