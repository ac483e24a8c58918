//! Detection settings - inputs of the detection chain.

use consent_domain::{COMPANION_PLUGIN, KNOWN_CLARITY_OPTIONS, PRIOR_SAVE_KEY};
use serde::{Deserialize, Serialize};

/// Keys consulted while detecting a project ID.
///
/// The defaults are the keys known to hold Clarity configuration; they
/// are overridable from the config file for sites using other plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Option holding a previously accepted ID
    pub prior_save_key: String,
    /// Plugin basename of the official Clarity plugin
    pub companion_plugin: String,
    /// Options of other plugins, scanned in order
    pub known_options: Vec<String>,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            prior_save_key: PRIOR_SAVE_KEY.to_string(),
            companion_plugin: COMPANION_PLUGIN.to_string(),
            known_options: KNOWN_CLARITY_OPTIONS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl DetectionSettings {
    // ==================== Builder Methods ====================

    pub fn with_prior_save_key(mut self, key: impl Into<String>) -> Self {
        self.prior_save_key = key.into();
        self
    }

    pub fn with_companion_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.companion_plugin = plugin.into();
        self
    }

    pub fn with_known_options<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_options = keys.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_known_keys() {
        let settings = DetectionSettings::default();
        assert_eq!(settings.prior_save_key, "clarity_project_id");
        assert_eq!(settings.companion_plugin, "microsoft-clarity/clarity.php");
        assert_eq!(settings.known_options.len(), 7);
        assert_eq!(settings.known_options[2], "clarity_settings");
    }

    #[test]
    fn test_builder() {
        let settings = DetectionSettings::default().with_known_options(["a", "b"]);
        assert_eq!(settings.known_options, vec!["a".to_string(), "b".to_string()]);
    }
}
