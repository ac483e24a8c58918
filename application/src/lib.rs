//! Application layer for clarity-consent-auto
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DetectionSettings, PollParams};
pub use ports::{
    consent_host::{ConsentHost, InvocationError},
    option_store::{OptionStore, StoreError, StoreScope},
    plugin_registry::PluginRegistry,
    script_injector::{InjectError, ScriptAsset, ScriptInjector},
};
pub use use_cases::consent_settings::{ConsentSettingsInput, ConsentSettingsUseCase};
pub use use_cases::detect_project_id::{
    CompanionPluginDetector, DetectProjectIdUseCase, DetectionContext, Detector,
    KnownOptionsDetector, PriorSaveDetector, detection_chain,
};
pub use use_cases::inject_consent::{InjectConsentUseCase, InjectionOutcome};
pub use use_cases::propagate_consent::{ClientState, ConsentPropagationClient};
pub use use_cases::setup_status::{SetupStatus, SetupStatusUseCase};
pub use use_cases::uninstall::{UninstallReport, UninstallUseCase};
