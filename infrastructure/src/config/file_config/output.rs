//! Output configuration from TOML (`[output]` section)

use consent_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
///
/// ```toml
/// [output]
/// format = "json"
/// color = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format used when `--json` is not given
    pub format: Option<OutputFormat>,
    /// Colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// `--json` wins over the configured format
    pub fn effective_format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.format.unwrap_or_default()
        }
    }

    /// `--no-color` wins over the configured setting
    pub fn use_color(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_configured_format() {
        let config: FileOutputConfig = toml::from_str("format = \"text\"").unwrap();
        assert_eq!(config.effective_format(false), OutputFormat::Text);
        assert_eq!(config.effective_format(true), OutputFormat::Json);
    }

    #[test]
    fn test_unset_format_is_text() {
        let config = FileOutputConfig::default();
        assert_eq!(config.effective_format(false), OutputFormat::Text);
    }

    #[test]
    fn test_color() {
        let config: FileOutputConfig = toml::from_str("color = false").unwrap();
        assert!(!config.use_color(false));
        assert!(FileOutputConfig::default().use_color(false));
        assert!(!FileOutputConfig::default().use_color(true));
    }
}
