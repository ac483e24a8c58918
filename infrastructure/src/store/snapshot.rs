//! Serializable contents of an option store

use consent_application::StoreScope;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// All namespaces of an option store.
///
/// This is also the on-disk format of [`JsonFileOptionStore`](super::JsonFileOptionStore):
///
/// ```json
/// {
///   "options": { "clarity_ad_storage": "granted" },
///   "network_options": {},
///   "transients": {},
///   "network_transients": {}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSnapshot {
    pub options: BTreeMap<String, Value>,
    pub network_options: BTreeMap<String, Value>,
    pub transients: BTreeMap<String, Value>,
    pub network_transients: BTreeMap<String, Value>,
}

impl OptionSnapshot {
    pub fn scope(&self, scope: StoreScope) -> &BTreeMap<String, Value> {
        match scope {
            StoreScope::Site => &self.options,
            StoreScope::Network => &self.network_options,
            StoreScope::Transient => &self.transients,
            StoreScope::NetworkTransient => &self.network_transients,
        }
    }

    pub fn scope_mut(&mut self, scope: StoreScope) -> &mut BTreeMap<String, Value> {
        match scope {
            StoreScope::Site => &mut self.options,
            StoreScope::Network => &mut self.network_options,
            StoreScope::Transient => &mut self.transients,
            StoreScope::NetworkTransient => &mut self.network_transients,
        }
    }

    pub fn len(&self) -> usize {
        StoreScope::ALL.iter().map(|s| self.scope(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
