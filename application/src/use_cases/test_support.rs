//! Shared in-memory ports for use case tests.

use crate::ports::option_store::{OptionStore, StoreError, StoreScope};
use crate::ports::plugin_registry::PluginRegistry;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MockOptionStore {
    values: Mutex<HashMap<(StoreScope, String), Value>>,
}

impl MockOptionStore {
    pub(crate) fn with(mut self, key: &str, value: Value) -> Self {
        self.values
            .get_mut()
            .unwrap()
            .insert((StoreScope::Site, key.to_string()), value);
        self
    }

    pub(crate) fn with_scoped(mut self, scope: StoreScope, key: &str, value: Value) -> Self {
        self.values
            .get_mut()
            .unwrap()
            .insert((scope, key.to_string()), value);
        self
    }

    pub(crate) fn contains(&self, scope: StoreScope, key: &str) -> bool {
        self.values
            .lock()
            .unwrap()
            .contains_key(&(scope, key.to_string()))
    }

    pub(crate) fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }
}

impl OptionStore for MockOptionStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values
            .lock()
            .unwrap()
            .get(&(StoreScope::Site, key.to_string()))
            .cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap()
            .insert((StoreScope::Site, key.to_string()), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.delete_scoped(StoreScope::Site, key)
    }

    fn delete_scoped(&self, scope: StoreScope, key: &str) -> Result<bool, StoreError> {
        Ok(self
            .values
            .lock()
            .unwrap()
            .remove(&(scope, key.to_string()))
            .is_some())
    }
}

#[derive(Default)]
pub(crate) struct MockPlugins {
    active: HashSet<String>,
}

impl MockPlugins {
    pub(crate) fn active(plugins: &[&str]) -> Self {
        Self {
            active: plugins.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl PluginRegistry for MockPlugins {
    fn is_active(&self, plugin: &str) -> bool {
        self.active.contains(plugin)
    }
}
