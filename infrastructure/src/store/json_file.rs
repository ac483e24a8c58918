//! JSON file backed option store
//!
//! The whole store is read on open and rewritten after every change.
//! Sites export their options table to this format so detection can run
//! outside the web request.

use super::snapshot::OptionSnapshot;
use consent_application::{OptionStore, StoreError, StoreScope};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Option store persisted as a single JSON document
#[derive(Debug)]
pub struct JsonFileOptionStore {
    path: PathBuf,
    snapshot: Mutex<OptionSnapshot>,
}

impl JsonFileOptionStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let snapshot = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| StoreError::Load(format!("{}: {}", path.display(), e)))?;
            if content.trim().is_empty() {
                OptionSnapshot::default()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| StoreError::Load(format!("{}: {}", path.display(), e)))?
            }
        } else {
            debug!("Option store {} does not exist yet", path.display());
            OptionSnapshot::default()
        };

        Ok(Self {
            path,
            snapshot: Mutex::new(snapshot),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, OptionSnapshot> {
        self.snapshot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, snapshot: &OptionSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Persist(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StoreError::Persist(e.to_string()))?;

        // Write to a sibling file first so a crash never leaves a truncated store
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| StoreError::Persist(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Persist(e.to_string()))
    }

    /// Apply `f` to a copy and keep it only once it is on disk
    fn mutate<T>(&self, f: impl FnOnce(&mut OptionSnapshot) -> T) -> Result<T, StoreError> {
        let mut guard = self.lock();
        let mut next = guard.clone();
        let result = f(&mut next);
        self.persist(&next)?;
        *guard = next;
        Ok(result)
    }
}

impl OptionStore for JsonFileOptionStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.get_scoped(StoreScope::Site, key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.mutate(|s| {
            s.options.insert(key.to_string(), value);
        })
    }

    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.delete_scoped(StoreScope::Site, key)
    }

    fn get_scoped(&self, scope: StoreScope, key: &str) -> Option<Value> {
        self.lock().scope(scope).get(key).cloned()
    }

    fn delete_scoped(&self, scope: StoreScope, key: &str) -> Result<bool, StoreError> {
        if !self.lock().scope(scope).contains_key(key) {
            return Ok(false);
        }
        self.mutate(|s| s.scope_mut(scope).remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileOptionStore::open(dir.path().join("options.json")).unwrap();
        assert_eq!(store.get("clarity_project_id"), None);
    }

    #[test]
    fn test_changes_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("options.json");

        let store = JsonFileOptionStore::open(&path).unwrap();
        store.set("clarity_ad_storage", json!("denied")).unwrap();
        store.set("clarity_project_id", json!("aq9itx5whc")).unwrap();
        assert!(store.delete("clarity_project_id").unwrap());

        let reopened = JsonFileOptionStore::open(&path).unwrap();
        assert_eq!(reopened.get("clarity_ad_storage"), Some(json!("denied")));
        assert_eq!(reopened.get("clarity_project_id"), None);
    }

    #[test]
    fn test_reads_all_namespaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(
            &path,
            r#"{
                "options": { "aioseo_options": { "tag": "https://www.clarity.ms/tag/aq9itx5whc" } },
                "transients": { "clarity_consent_cache": 1 }
            }"#,
        )
        .unwrap();

        let store = JsonFileOptionStore::open(&path).unwrap();
        assert!(store.get("aioseo_options").is_some());
        assert!(store
            .get_scoped(StoreScope::Transient, "clarity_consent_cache")
            .is_some());
        assert!(store
            .delete_scoped(StoreScope::Transient, "clarity_consent_cache")
            .unwrap());
        assert!(!store
            .delete_scoped(StoreScope::NetworkTransient, "clarity_consent_cache")
            .unwrap());
    }

    #[test]
    fn test_failed_persist_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // The parent directory cannot be created over a regular file
        let store = JsonFileOptionStore::open(blocker.join("options.json")).unwrap();
        let err = store.set("clarity_ad_storage", json!("denied")).unwrap_err();

        assert!(matches!(err, StoreError::Persist(_)));
        assert_eq!(store.get("clarity_ad_storage"), None);
    }

    #[test]
    fn test_failed_delete_keeps_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{ "options": { "clarity_project_id": "aq9itx5whc" } }"#).unwrap();
        let store = JsonFileOptionStore::open(&path).unwrap();

        // A directory at the temp path makes the write fail
        fs::create_dir(path.with_extension("json.tmp")).unwrap();

        assert!(store.delete("clarity_project_id").is_err());
        assert_eq!(store.get("clarity_project_id"), Some(json!("aq9itx5whc")));
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileOptionStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Load(_)));
    }
}
