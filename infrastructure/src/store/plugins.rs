//! Plugin registry backed by the option store
//!
//! Active plugins are recorded in the options themselves: `active_plugins`
//! is a list of plugin basenames for the site, and `active_sitewide_plugins`
//! maps basenames to activation times for network-activated plugins.

use consent_application::{OptionStore, PluginRegistry, StoreScope};
use serde_json::Value;
use std::sync::Arc;

/// Site option listing active plugins
pub const ACTIVE_PLUGINS_KEY: &str = "active_plugins";

/// Network option mapping network-activated plugins
pub const ACTIVE_SITEWIDE_PLUGINS_KEY: &str = "active_sitewide_plugins";

/// Reads plugin activation state from an [`OptionStore`]
pub struct StorePluginRegistry<S: OptionStore> {
    store: Arc<S>,
}

impl<S: OptionStore> StorePluginRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn site_active(&self, plugin: &str) -> bool {
        match self.store.get(ACTIVE_PLUGINS_KEY) {
            Some(Value::Array(plugins)) => plugins.iter().any(|p| p.as_str() == Some(plugin)),
            // Some exports keep the list as an index-keyed map
            Some(Value::Object(plugins)) => plugins.values().any(|p| p.as_str() == Some(plugin)),
            _ => false,
        }
    }

    fn network_active(&self, plugin: &str) -> bool {
        match self
            .store
            .get_scoped(StoreScope::Network, ACTIVE_SITEWIDE_PLUGINS_KEY)
        {
            Some(Value::Object(plugins)) => plugins.contains_key(plugin),
            _ => false,
        }
    }
}

impl<S: OptionStore> PluginRegistry for StorePluginRegistry<S> {
    fn is_active(&self, plugin: &str) -> bool {
        self.site_active(plugin) || self.network_active(plugin)
    }
}
