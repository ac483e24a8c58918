//! Detection result value object

use super::provenance::Provenance;
use crate::identifier::ProjectId;
use serde::{Deserialize, Serialize};

/// Outcome of one detection pass.
///
/// Created fresh on every pass and never mutated. The project ID, when
/// present, is always a validated [`ProjectId`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    project_id: Option<ProjectId>,
    provenance: Option<Provenance>,
}

impl DetectionResult {
    /// An ID was found
    pub fn found(project_id: ProjectId, provenance: Provenance) -> Self {
        Self {
            project_id: Some(project_id),
            provenance: Some(provenance),
        }
    }

    /// The companion plugin is active but no ID was resolved
    pub fn companion_active() -> Self {
        Self {
            project_id: None,
            provenance: Some(Provenance::CompanionPluginActive),
        }
    }

    /// Every source was exhausted
    pub fn undetected() -> Self {
        Self::default()
    }

    pub fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    pub fn provenance(&self) -> Option<&Provenance> {
        self.provenance.as_ref()
    }

    pub fn is_detected(&self) -> bool {
        self.project_id.is_some()
    }

    /// Whether the admin notice asking to finish setup should be shown
    pub fn needs_configuration_notice(&self) -> bool {
        self.project_id.is_none() && self.provenance == Some(Provenance::CompanionPluginActive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undetected_is_empty() {
        let result = DetectionResult::undetected();
        assert!(!result.is_detected());
        assert!(result.provenance().is_none());
        assert!(!result.needs_configuration_notice());
    }

    #[test]
    fn test_companion_active_needs_notice() {
        let result = DetectionResult::companion_active();
        assert!(!result.is_detected());
        assert!(result.needs_configuration_notice());
    }

    #[test]
    fn test_found() {
        let id = ProjectId::parse("aq9itx5whc").unwrap();
        let result = DetectionResult::found(id.clone(), Provenance::PreviouslySaved);
        assert_eq!(result.project_id(), Some(&id));
        assert!(!result.needs_configuration_notice());
    }
}
