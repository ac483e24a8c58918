//! Consent script configuration from TOML (`[script]` section)

use super::ConfigValidationError;
use consent_application::ScriptAsset;
use serde::{Deserialize, Serialize};

/// Raw script asset configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScriptConfig {
    pub handle: String,
    pub src: String,
    pub version: String,
    pub in_footer: bool,
}

impl Default for FileScriptConfig {
    fn default() -> Self {
        let asset = ScriptAsset::default();
        Self {
            handle: asset.handle,
            src: asset.src,
            version: asset.version,
            in_footer: asset.in_footer,
        }
    }
}

impl FileScriptConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.handle.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyScriptField("handle"));
        }
        if self.src.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyScriptField("src"));
        }
        issues
    }

    pub fn to_script_asset(&self) -> ScriptAsset {
        ScriptAsset {
            handle: self.handle.clone(),
            src: self.src.clone(),
            version: self.version.clone(),
            in_footer: self.in_footer,
        }
    }
}
