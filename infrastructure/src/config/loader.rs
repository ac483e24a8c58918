//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "clarity-consent-auto";
const ENV_PREFIX: &str = "CLARITY_CONSENT_";
const PROJECT_FILES: [&str; 2] = ["clarity-consent.toml", ".clarity-consent.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CLARITY_CONSENT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./clarity-consent.toml` or `./.clarity-consent.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/clarity-consent-auto/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path, Self::project_config_path().as_deref())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>, project_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = project_path {
            figment = figment.merge(Toml::file(path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/clarity-consent-auto/config.toml if set,
    /// otherwise falls back to ~/.config/clarity-consent-auto/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Names of the `CLARITY_CONSENT_*` variables currently set, sorted
    pub fn env_overrides() -> Vec<String> {
        let mut names: Vec<String> = std::env::vars()
            .map(|(name, _)| name)
            .filter(|name| name.starts_with(ENV_PREFIX))
            .collect();
        names.sort();
        names
    }

    /// Describe the config sources being used (for debugging)
    pub fn config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        let overrides = Self::env_overrides();
        if overrides.is_empty() {
            lines.push(format!("  [     ] Env:     {}*", ENV_PREFIX));
        } else {
            lines.push(format!("  [FOUND] Env:     {}", overrides.join(", ")));
        }

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{}] Explicit: {}", marker, path.display()));
        }

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project: {}", path.display()));
        } else {
            lines.push(format!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]));
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", marker, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}
