//! Detect Project ID use case
//!
//! Resolves the Clarity project ID from configuration that already exists
//! on the site. Sources are tried in a fixed order and the first one that
//! produces a result wins:
//!
//! 1. [`PriorSaveDetector`]: an ID saved by an earlier version
//! 2. [`CompanionPluginDetector`]: the official Clarity plugin is active
//! 3. [`KnownOptionsDetector`]: options of other plugins, scanned in order
//!
//! Every call runs the chain from scratch against the store. Nothing is
//! cached between calls, and the store is only read.

use crate::config::DetectionSettings;
use crate::ports::option_store::OptionStore;
use crate::ports::plugin_registry::PluginRegistry;
use consent_domain::{DetectionResult, ProjectId, Provenance, extract_project_id};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Read-only view of the site handed to each detector
pub struct DetectionContext<'a> {
    pub store: &'a dyn OptionStore,
    pub plugins: &'a dyn PluginRegistry,
}

/// One source in the detection chain.
///
/// Detectors are stateless; `None` means "try the next source".
pub trait Detector: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn attempt(&self, ctx: &DetectionContext<'_>) -> Option<DetectionResult>;
}

/// Accepts the ID stored under the prior save key if it is still valid.
///
/// The stored value is validated as-is, not run through the extractor.
pub struct PriorSaveDetector {
    key: String,
}

impl PriorSaveDetector {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Detector for PriorSaveDetector {
    fn name(&self) -> &'static str {
        "prior_save"
    }

    fn attempt(&self, ctx: &DetectionContext<'_>) -> Option<DetectionResult> {
        let saved = match ctx.store.get(&self.key)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        let id = ProjectId::parse(&saved)?;
        Some(DetectionResult::found(id, Provenance::PreviouslySaved))
    }
}

/// Stops the chain when the official Clarity plugin is active.
///
/// That plugin keeps the ID to itself, so the result carries no ID; it
/// only tells the settings page that configuration is still needed.
pub struct CompanionPluginDetector {
    plugin: String,
}

impl CompanionPluginDetector {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
        }
    }
}

impl Detector for CompanionPluginDetector {
    fn name(&self) -> &'static str {
        "companion_plugin"
    }

    fn attempt(&self, ctx: &DetectionContext<'_>) -> Option<DetectionResult> {
        ctx.plugins
            .is_active(&self.plugin)
            .then(DetectionResult::companion_active)
    }
}

/// Scans options written by other plugins for an embedded ID.
pub struct KnownOptionsDetector {
    keys: Vec<String>,
}

impl KnownOptionsDetector {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

impl Detector for KnownOptionsDetector {
    fn name(&self) -> &'static str {
        "known_options"
    }

    fn attempt(&self, ctx: &DetectionContext<'_>) -> Option<DetectionResult> {
        self.keys.iter().find_map(|key| {
            let value = ctx.store.get(key)?;
            let id = extract_project_id(Some(&value));
            if id.is_none() {
                debug!("Option {} is set but holds no project ID", key);
            }
            id.map(|id| DetectionResult::found(id, Provenance::DetectedFrom(key.clone())))
        })
    }
}

/// Build the detection chain in priority order
pub fn detection_chain(settings: &DetectionSettings) -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(PriorSaveDetector::new(&settings.prior_save_key)),
        Box::new(CompanionPluginDetector::new(&settings.companion_plugin)),
        Box::new(KnownOptionsDetector::new(settings.known_options.clone())),
    ]
}

/// Use case for detecting the Clarity project ID
pub struct DetectProjectIdUseCase<S: OptionStore, P: PluginRegistry> {
    store: Arc<S>,
    plugins: Arc<P>,
    companion_plugin: String,
    detectors: Vec<Box<dyn Detector>>,
}

impl<S: OptionStore, P: PluginRegistry> DetectProjectIdUseCase<S, P> {
    pub fn new(store: Arc<S>, plugins: Arc<P>) -> Self {
        Self::with_settings(store, plugins, &DetectionSettings::default())
    }

    pub fn with_settings(store: Arc<S>, plugins: Arc<P>, settings: &DetectionSettings) -> Self {
        Self {
            store,
            plugins,
            companion_plugin: settings.companion_plugin.clone(),
            detectors: detection_chain(settings),
        }
    }

    /// Run the detection chain once
    pub fn execute(&self) -> DetectionResult {
        let ctx = DetectionContext {
            store: self.store.as_ref(),
            plugins: self.plugins.as_ref(),
        };

        for detector in &self.detectors {
            if let Some(result) = detector.attempt(&ctx) {
                match result.project_id() {
                    Some(id) => info!("Project ID {} detected by {}", id, detector.name()),
                    None => info!("Detection stopped by {} without a project ID", detector.name()),
                }
                return result;
            }
            debug!("Detector {} found nothing", detector.name());
        }

        debug!("No Clarity project ID detected");
        DetectionResult::undetected()
    }

    /// Whether the official Clarity plugin is active, independent of the chain
    pub fn is_companion_active(&self) -> bool {
        self.plugins.is_active(&self.companion_plugin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockOptionStore, MockPlugins};
    use consent_domain::{COMPANION_PLUGIN, PRIOR_SAVE_KEY};
    use serde_json::json;

    fn use_case(
        store: MockOptionStore,
        plugins: MockPlugins,
    ) -> DetectProjectIdUseCase<MockOptionStore, MockPlugins> {
        DetectProjectIdUseCase::new(Arc::new(store), Arc::new(plugins))
    }

    #[test]
    fn test_empty_store_is_undetected() {
        let result = use_case(MockOptionStore::default(), MockPlugins::default()).execute();
        assert_eq!(result, DetectionResult::undetected());
        assert!(result.provenance().is_none());
    }

    #[test]
    fn test_prior_save_wins_over_known_options() {
        let store = MockOptionStore::default()
            .with(PRIOR_SAVE_KEY, json!("aq9itx5whc"))
            .with("clarity_settings", json!({ "project_id": "zz8xyz12ab" }));
        let result = use_case(store, MockPlugins::default()).execute();

        assert_eq!(result.project_id().unwrap().as_str(), "aq9itx5whc");
        assert_eq!(result.provenance(), Some(&Provenance::PreviouslySaved));
    }

    #[test]
    fn test_prior_save_is_validated_not_extracted() {
        // A URL is fine for the extractor but not as a saved ID
        let store = MockOptionStore::default()
            .with(PRIOR_SAVE_KEY, json!("https://www.clarity.ms/tag/aq9itx5whc"));
        let result = use_case(store, MockPlugins::default()).execute();
        assert!(!result.is_detected());
    }

    #[test]
    fn test_invalid_prior_save_falls_through() {
        let store = MockOptionStore::default()
            .with(PRIOR_SAVE_KEY, json!("settings"))
            .with("microsoft_clarity_project_id", json!("aq9itx5whc"));
        let result = use_case(store, MockPlugins::default()).execute();
        assert_eq!(
            result.provenance(),
            Some(&Provenance::DetectedFrom("microsoft_clarity_project_id".into()))
        );
    }

    #[test]
    fn test_companion_plugin_stops_chain() {
        let store = MockOptionStore::default().with("clarity_settings", json!("aq9itx5whc"));
        let result = use_case(store, MockPlugins::active(&[COMPANION_PLUGIN])).execute();

        assert!(result.project_id().is_none());
        assert_eq!(result.provenance(), Some(&Provenance::CompanionPluginActive));
        assert!(result.needs_configuration_notice());
    }

    #[test]
    fn test_prior_save_wins_over_companion() {
        let store = MockOptionStore::default().with(PRIOR_SAVE_KEY, json!("aq9itx5whc"));
        let result = use_case(store, MockPlugins::active(&[COMPANION_PLUGIN])).execute();
        assert_eq!(result.provenance(), Some(&Provenance::PreviouslySaved));
    }

    #[test]
    fn test_known_options_scanned_in_order() {
        let store = MockOptionStore::default()
            .with("aioseo_options", json!({ "clarity": "https://www.clarity.ms/tag/last1234x" }))
            .with("clarity_settings", json!({ "id": "first123x" }));
        let result = use_case(store, MockPlugins::default()).execute();

        assert_eq!(result.project_id().unwrap().as_str(), "first123x");
        assert_eq!(
            result.provenance().unwrap().label(),
            "Detected from: clarity_settings"
        );
    }

    #[test]
    fn test_option_without_id_is_skipped() {
        let store = MockOptionStore::default()
            .with("microsoft_clarity_settings", json!({ "enabled": "wordpress" }))
            .with("seopress_analytics_clarity", json!("https://www.clarity.ms/tag/aq9itx5whc"));
        let result = use_case(store, MockPlugins::default()).execute();
        assert_eq!(
            result.provenance(),
            Some(&Provenance::DetectedFrom("seopress_analytics_clarity".into()))
        );
    }

    #[test]
    fn test_detection_is_idempotent() {
        let store = MockOptionStore::default().with("clarity_settings", json!("id: ab3d9f12xy"));
        let use_case = use_case(store, MockPlugins::default());

        let first = use_case.execute();
        let second = use_case.execute();
        assert_eq!(first, second);
        assert_eq!(first.project_id().unwrap().as_str(), "ab3d9f12xy");
    }

    #[test]
    fn test_detection_is_not_cached() {
        let store = Arc::new(MockOptionStore::default());
        let use_case = DetectProjectIdUseCase::new(store.clone(), Arc::new(MockPlugins::default()));
        assert!(!use_case.execute().is_detected());

        store.set(PRIOR_SAVE_KEY, json!("aq9itx5whc")).unwrap();
        assert!(use_case.execute().is_detected());
    }

    #[test]
    fn test_custom_known_options() {
        let settings = DetectionSettings::default().with_known_options(["my_tracking"]);
        let store = MockOptionStore::default()
            .with("clarity_settings", json!("aq9itx5whc"))
            .with("my_tracking", json!("zz8xyz12ab"));
        let use_case = DetectProjectIdUseCase::with_settings(
            Arc::new(store),
            Arc::new(MockPlugins::default()),
            &settings,
        );
        assert_eq!(use_case.execute().project_id().unwrap().as_str(), "zz8xyz12ab");
    }

    #[test]
    fn test_is_companion_active() {
        let use_case = use_case(MockOptionStore::default(), MockPlugins::active(&[COMPANION_PLUGIN]));
        assert!(use_case.is_companion_active());
    }
}
