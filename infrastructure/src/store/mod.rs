//! Option store adapters
//!
//! - [`InMemoryOptionStore`]: volatile store for tests and dry runs
//! - [`JsonFileOptionStore`]: store persisted as one JSON document
//! - [`StorePluginRegistry`]: plugin activation read from the store itself

mod json_file;
mod memory;
mod plugins;
mod snapshot;

pub use json_file::JsonFileOptionStore;
pub use memory::InMemoryOptionStore;
pub use plugins::{ACTIVE_PLUGINS_KEY, ACTIVE_SITEWIDE_PLUGINS_KEY, StorePluginRegistry};
pub use snapshot::OptionSnapshot;
