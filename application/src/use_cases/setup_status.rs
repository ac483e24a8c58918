//! Setup Status use case
//!
//! Backs the settings page: re-runs detection on every load and combines
//! it with the companion plugin state and the stored consent decision.

use crate::config::DetectionSettings;
use crate::ports::option_store::OptionStore;
use crate::ports::plugin_registry::PluginRegistry;
use crate::use_cases::consent_settings::ConsentSettingsUseCase;
use crate::use_cases::detect_project_id::DetectProjectIdUseCase;
use consent_domain::{ConsentDecision, DetectionResult, SetupState};
use serde::Serialize;
use std::sync::Arc;

/// Everything the settings page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupStatus {
    pub companion_active: bool,
    pub detection: DetectionResult,
    pub state: SetupState,
    pub consent: ConsentDecision,
    /// Whether the "complete setup" admin notice is shown
    pub show_notice: bool,
}

/// Use case for the settings page status
pub struct SetupStatusUseCase<S: OptionStore, P: PluginRegistry> {
    detect: DetectProjectIdUseCase<S, P>,
    settings: ConsentSettingsUseCase<S>,
}

impl<S: OptionStore, P: PluginRegistry> SetupStatusUseCase<S, P> {
    pub fn new(store: Arc<S>, plugins: Arc<P>) -> Self {
        Self::with_settings(store, plugins, &DetectionSettings::default())
    }

    pub fn with_settings(store: Arc<S>, plugins: Arc<P>, settings: &DetectionSettings) -> Self {
        Self {
            detect: DetectProjectIdUseCase::with_settings(Arc::clone(&store), plugins, settings),
            settings: ConsentSettingsUseCase::new(store),
        }
    }

    pub fn execute(&self) -> SetupStatus {
        let detection = self.detect.execute();
        let companion_active = self.detect.is_companion_active();
        let state = SetupState::derive(&detection, companion_active);

        SetupStatus {
            companion_active,
            show_notice: detection.needs_configuration_notice(),
            detection,
            state,
            consent: self.settings.load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockOptionStore, MockPlugins};
    use consent_domain::{COMPANION_PLUGIN, PRIOR_SAVE_KEY};
    use serde_json::json;

    #[test]
    fn test_nothing_installed() {
        let status = SetupStatusUseCase::new(
            Arc::new(MockOptionStore::default()),
            Arc::new(MockPlugins::default()),
        )
        .execute();

        assert!(!status.companion_active);
        assert_eq!(status.state, SetupState::CompanionMissing);
        assert!(!status.show_notice);
    }

    #[test]
    fn test_companion_active_without_id_needs_configuration() {
        let status = SetupStatusUseCase::new(
            Arc::new(MockOptionStore::default()),
            Arc::new(MockPlugins::active(&[COMPANION_PLUGIN])),
        )
        .execute();

        assert!(status.companion_active);
        assert_eq!(status.state, SetupState::ConfigurationNeeded);
        assert!(status.show_notice);
    }

    #[test]
    fn test_saved_id_with_companion_is_active() {
        let store = MockOptionStore::default().with(PRIOR_SAVE_KEY, json!("aq9itx5whc"));
        let status = SetupStatusUseCase::new(
            Arc::new(store),
            Arc::new(MockPlugins::active(&[COMPANION_PLUGIN])),
        )
        .execute();

        assert!(matches!(status.state, SetupState::Active { .. }));
        assert!(!status.show_notice);
        assert_eq!(status.consent, ConsentDecision::default());
    }
}
