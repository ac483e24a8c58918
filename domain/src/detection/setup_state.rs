//! Settings page state derived from a detection pass

use super::provenance::Provenance;
use super::result::DetectionResult;
use crate::identifier::ProjectId;
use serde::{Deserialize, Serialize};

/// What the settings page should present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SetupState {
    /// The Microsoft Clarity plugin is not installed or not active;
    /// show setup instructions instead of the consent form
    CompanionMissing,
    /// The Microsoft Clarity plugin is active but no ID could be resolved;
    /// the consent layer is on standby
    ConfigurationNeeded,
    /// An ID is known and consent is passed to Clarity
    Active {
        project_id: ProjectId,
        provenance: Provenance,
    },
}

impl SetupState {
    /// Derive the page state.
    ///
    /// The companion plugin check is independent of the detection chain:
    /// a previously saved ID still reports the companion as active or not.
    pub fn derive(detection: &DetectionResult, companion_active: bool) -> Self {
        if !companion_active {
            return SetupState::CompanionMissing;
        }

        match (detection.project_id(), detection.provenance()) {
            (Some(id), Some(provenance)) => SetupState::Active {
                project_id: id.clone(),
                provenance: provenance.clone(),
            },
            _ => SetupState::ConfigurationNeeded,
        }
    }

    /// Whether the consent configuration form is shown
    pub fn shows_consent_form(&self) -> bool {
        !matches!(self, SetupState::CompanionMissing)
    }

    pub fn description(&self) -> &'static str {
        match self {
            SetupState::CompanionMissing => "Microsoft Clarity plugin required",
            SetupState::ConfigurationNeeded => {
                "Configuration needed: Microsoft Clarity plugin is active but no Project ID was detected"
            }
            SetupState::Active { .. } => "Consent is automatically passed to Clarity",
        }
    }
}
