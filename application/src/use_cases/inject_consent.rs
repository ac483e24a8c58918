//! Inject Consent use case
//!
//! Runs on every page render: detect the project ID and, only if one is
//! found, enqueue the consent script with the current consent payload.
//! Without an ID nothing reaches the page.

use crate::config::DetectionSettings;
use crate::ports::option_store::OptionStore;
use crate::ports::plugin_registry::PluginRegistry;
use crate::ports::script_injector::{InjectError, ScriptAsset, ScriptInjector};
use crate::use_cases::consent_settings::ConsentSettingsUseCase;
use crate::use_cases::detect_project_id::DetectProjectIdUseCase;
use consent_domain::{ConsentPayload, DetectionResult, ProjectId};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of one render-time injection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InjectionOutcome {
    /// No project ID; the script was not enqueued
    Skipped { detection: DetectionResult },
    /// The script was enqueued with this payload
    Enqueued {
        project_id: ProjectId,
        payload: ConsentPayload,
    },
}

impl InjectionOutcome {
    pub fn is_enqueued(&self) -> bool {
        matches!(self, InjectionOutcome::Enqueued { .. })
    }
}

/// Use case for render-time consent script injection
pub struct InjectConsentUseCase<S: OptionStore, P: PluginRegistry, I: ScriptInjector> {
    detect: DetectProjectIdUseCase<S, P>,
    settings: ConsentSettingsUseCase<S>,
    injector: Arc<I>,
    asset: ScriptAsset,
}

impl<S: OptionStore, P: PluginRegistry, I: ScriptInjector> InjectConsentUseCase<S, P, I> {
    pub fn new(store: Arc<S>, plugins: Arc<P>, injector: Arc<I>) -> Self {
        Self::with_settings(store, plugins, injector, &DetectionSettings::default())
    }

    pub fn with_settings(
        store: Arc<S>,
        plugins: Arc<P>,
        injector: Arc<I>,
        settings: &DetectionSettings,
    ) -> Self {
        Self {
            detect: DetectProjectIdUseCase::with_settings(Arc::clone(&store), plugins, settings),
            settings: ConsentSettingsUseCase::new(store),
            injector,
            asset: ScriptAsset::default(),
        }
    }

    pub fn with_asset(mut self, asset: ScriptAsset) -> Self {
        self.asset = asset;
        self
    }

    pub fn execute(&self) -> Result<InjectionOutcome, InjectError> {
        let detection = self.detect.execute();

        let Some(project_id) = detection.project_id().cloned() else {
            debug!("No project ID detected, consent script not enqueued");
            return Ok(InjectionOutcome::Skipped { detection });
        };

        let payload = self.settings.load().payload();
        self.injector.enqueue(&self.asset, &payload)?;
        info!(
            "Enqueued {} for project {} (ad_storage={}, analytics_storage={})",
            self.asset.handle, project_id, payload.ad_storage, payload.analytics_storage
        );

        Ok(InjectionOutcome::Enqueued {
            project_id,
            payload,
        })
    }
}
