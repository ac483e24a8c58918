//! Detection configuration from TOML (`[detection]` section)

use super::ConfigValidationError;
use consent_application::DetectionSettings;
use serde::{Deserialize, Serialize};

/// Raw detection configuration from TOML
///
/// ```toml
/// [detection]
/// prior_save_key = "clarity_project_id"
/// companion_plugin = "microsoft-clarity/clarity.php"
/// known_options = ["microsoft_clarity_project_id", "clarity_settings"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDetectionConfig {
    pub prior_save_key: String,
    pub companion_plugin: String,
    /// Scanned in the listed order
    pub known_options: Vec<String>,
}

impl Default for FileDetectionConfig {
    fn default() -> Self {
        let defaults = DetectionSettings::default();
        Self {
            prior_save_key: defaults.prior_save_key,
            companion_plugin: defaults.companion_plugin,
            known_options: defaults.known_options,
        }
    }
}

impl FileDetectionConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.prior_save_key.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyField("prior_save_key"));
        }
        if self.companion_plugin.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyField("companion_plugin"));
        }
        if self.known_options.is_empty() {
            issues.push(ConfigValidationError::EmptyKnownOptions);
        } else if self.known_options.iter().any(|k| k.trim().is_empty()) {
            issues.push(ConfigValidationError::EmptyOptionKey);
        }
        issues
    }

    pub fn to_detection_settings(&self) -> DetectionSettings {
        DetectionSettings::default()
            .with_prior_save_key(&self.prior_save_key)
            .with_companion_plugin(&self.companion_plugin)
            .with_known_options(self.known_options.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_application_defaults() {
        assert_eq!(
            FileDetectionConfig::default().to_detection_settings(),
            DetectionSettings::default()
        );
    }

    #[test]
    fn test_empty_known_options_is_rejected() {
        let config: FileDetectionConfig = toml::from_str("known_options = []").unwrap();
        assert_eq!(
            config.validate(),
            vec![ConfigValidationError::EmptyKnownOptions]
        );
    }
}
