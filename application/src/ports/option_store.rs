//! Option store port
//!
//! Defines the interface to the site's persistent key-value settings.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while writing to the option store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to persist option store: {0}")]
    Persist(String),

    #[error("Failed to load option store: {0}")]
    Load(String),
}

/// Namespace a key lives in.
///
/// Detection only reads [`StoreScope::Site`] options. The other scopes
/// exist so uninstall can clean up network-wide and transient copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreScope {
    /// Regular per-site option
    Site,
    /// Network-wide option of a multisite install
    Network,
    /// Per-site transient cache entry
    Transient,
    /// Network-wide transient cache entry
    NetworkTransient,
}

impl StoreScope {
    pub const ALL: [StoreScope; 4] = [
        StoreScope::Site,
        StoreScope::Network,
        StoreScope::Transient,
        StoreScope::NetworkTransient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreScope::Site => "site",
            StoreScope::Network => "network",
            StoreScope::Transient => "transient",
            StoreScope::NetworkTransient => "network_transient",
        }
    }
}

impl std::fmt::Display for StoreScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent key-value option store
///
/// Values may be strings, arrays or objects; their shape is not known in
/// advance. Implementations (adapters) live in the infrastructure layer.
pub trait OptionStore: Send + Sync {
    /// Read a site option
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a site option
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Delete a site option, returning whether it existed
    fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Read a key from the given scope
    ///
    /// The default only handles [`StoreScope::Site`].
    fn get_scoped(&self, scope: StoreScope, key: &str) -> Option<Value> {
        match scope {
            StoreScope::Site => self.get(key),
            _ => None,
        }
    }

    /// Delete a key from the given scope, returning whether it existed
    ///
    /// Stores without network or transient namespaces keep this default,
    /// which only handles [`StoreScope::Site`].
    fn delete_scoped(&self, scope: StoreScope, key: &str) -> Result<bool, StoreError> {
        match scope {
            StoreScope::Site => self.delete(key),
            _ => Ok(false),
        }
    }
}
