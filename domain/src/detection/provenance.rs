//! Where a detection result came from

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance of a [`DetectionResult`](super::result::DetectionResult).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum Provenance {
    /// The ID saved by a previous version of this plugin is still valid
    PreviouslySaved,
    /// The official Microsoft Clarity plugin is active; it owns the ID
    CompanionPluginActive,
    /// Extracted from the named option of another plugin
    DetectedFrom(String),
}

impl Provenance {
    /// Human-readable label for the settings page
    pub fn label(&self) -> String {
        match self {
            Provenance::PreviouslySaved => "Previously saved ID".to_string(),
            Provenance::CompanionPluginActive => "Microsoft Clarity Plugin (active)".to_string(),
            Provenance::DetectedFrom(key) => format!("Detected from: {}", key),
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Provenance::PreviouslySaved.label(), "Previously saved ID");
        assert_eq!(
            Provenance::DetectedFrom("clarity_settings".into()).to_string(),
            "Detected from: clarity_settings"
        );
    }
}
