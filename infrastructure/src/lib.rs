//! Infrastructure layer for clarity-consent-auto
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod browser;
pub mod config;
pub mod script;
pub mod store;

// Re-export commonly used types
pub use browser::{DispatchedEvent, EntryPoint, Invocation, SimulatedPage};
pub use config::{
    ConfigLoader, ConfigValidationError, FileClientConfig, FileConfig, FileDetectionConfig,
    FileOutputConfig, FileScriptConfig, FileStoreConfig,
};
pub use script::{EnqueuedScript, Placement, ScriptTagRenderer};
pub use store::{
    ACTIVE_PLUGINS_KEY, ACTIVE_SITEWIDE_PLUGINS_KEY, InMemoryOptionStore, JsonFileOptionStore,
    OptionSnapshot, StorePluginRegistry,
};
