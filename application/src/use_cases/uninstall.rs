//! Uninstall use case
//!
//! Removes every key this plugin owns: current settings, options left by
//! earlier versions and cache transients, in both the site and network
//! namespaces.

use crate::ports::option_store::{OptionStore, StoreError, StoreScope};
use consent_domain::{KeyKind, owned_keys};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Keys actually removed during uninstall
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UninstallReport {
    pub removed: Vec<String>,
    pub attempted: usize,
}

/// Use case for removing all plugin data
pub struct UninstallUseCase<S: OptionStore> {
    store: Arc<S>,
}

impl<S: OptionStore> UninstallUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<UninstallReport, StoreError> {
        let mut report = UninstallReport::default();

        for info in owned_keys() {
            let scopes = match info.kind {
                KeyKind::Setting | KeyKind::Legacy => [StoreScope::Site, StoreScope::Network],
                KeyKind::Transient => [StoreScope::Transient, StoreScope::NetworkTransient],
            };

            for scope in scopes {
                report.attempted += 1;
                if self.store.delete_scoped(scope, info.key)? {
                    debug!("Removed {} ({})", info.key, scope);
                    report.removed.push(format!("{}:{}", scope, info.key));
                }
            }
        }

        info!(
            "Uninstall removed {} of {} keys",
            report.removed.len(),
            report.attempted
        );
        Ok(report)
    }
}
