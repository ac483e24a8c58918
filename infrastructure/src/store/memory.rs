//! In-memory option store

use super::snapshot::OptionSnapshot;
use consent_application::{OptionStore, StoreError, StoreScope};
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};

/// Option store kept entirely in memory.
///
/// Thread-safe via `Mutex<OptionSnapshot>`. Used when no store file is
/// configured and as a fixture in tests.
#[derive(Debug, Default)]
pub struct InMemoryOptionStore {
    snapshot: Mutex<OptionSnapshot>,
}

impl InMemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: OptionSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }

    /// Builder-style site option insert
    pub fn with_option(self, key: impl Into<String>, value: Value) -> Self {
        self.lock().options.insert(key.into(), value);
        self
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> OptionSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, OptionSnapshot> {
        self.snapshot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OptionStore for InMemoryOptionStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.get_scoped(StoreScope::Site, key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.lock().options.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.delete_scoped(StoreScope::Site, key)
    }

    fn get_scoped(&self, scope: StoreScope, key: &str) -> Option<Value> {
        self.lock().scope(scope).get(key).cloned()
    }

    fn delete_scoped(&self, scope: StoreScope, key: &str) -> Result<bool, StoreError> {
        Ok(self.lock().scope_mut(scope).remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_delete() {
        let store = InMemoryOptionStore::new();
        assert_eq!(store.get("clarity_ad_storage"), None);

        store.set("clarity_ad_storage", json!("denied")).unwrap();
        assert_eq!(store.get("clarity_ad_storage"), Some(json!("denied")));

        assert!(store.delete("clarity_ad_storage").unwrap());
        assert!(!store.delete("clarity_ad_storage").unwrap());
    }

    #[test]
    fn test_scopes_are_separate() {
        let mut snapshot = OptionSnapshot::default();
        snapshot
            .network_options
            .insert("clarity_project_id".into(), json!("aq9itx5whc"));
        let store = InMemoryOptionStore::from_snapshot(snapshot);

        assert_eq!(store.get("clarity_project_id"), None);
        assert!(store.get_scoped(StoreScope::Network, "clarity_project_id").is_some());
        assert!(!store.delete("clarity_project_id").unwrap());
        assert!(store
            .delete_scoped(StoreScope::Network, "clarity_project_id")
            .unwrap());
        assert!(store.snapshot().is_empty());
    }
}
