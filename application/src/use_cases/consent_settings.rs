//! Consent settings use case
//!
//! Reads and writes the two persisted consent settings. Writes are
//! sanitized: anything other than `granted` / `denied` is stored as
//! `granted` instead of being rejected.

use crate::ports::option_store::{OptionStore, StoreError};
use consent_domain::{AD_STORAGE_KEY, ANALYTICS_STORAGE_KEY, ConsentDecision, ConsentStatus};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Raw settings form input, before sanitization
#[derive(Debug, Clone, Default)]
pub struct ConsentSettingsInput {
    pub ad_storage: Option<String>,
    pub analytics_storage: Option<String>,
}

impl ConsentSettingsInput {
    pub fn new(ad_storage: impl Into<String>, analytics_storage: impl Into<String>) -> Self {
        Self {
            ad_storage: Some(ad_storage.into()),
            analytics_storage: Some(analytics_storage.into()),
        }
    }
}

/// Use case for the persisted consent decision
pub struct ConsentSettingsUseCase<S: OptionStore> {
    store: Arc<S>,
}

impl<S: OptionStore> ConsentSettingsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Current decision; unset or invalid values read as `granted`
    pub fn load(&self) -> ConsentDecision {
        ConsentDecision::new(
            ConsentStatus::from_option_value(self.store.get(AD_STORAGE_KEY).as_ref()),
            ConsentStatus::from_option_value(self.store.get(ANALYTICS_STORAGE_KEY).as_ref()),
        )
    }

    /// Sanitize and persist the submitted values.
    ///
    /// A field left out of the input keeps its stored value.
    pub fn update(&self, input: ConsentSettingsInput) -> Result<ConsentDecision, StoreError> {
        for (key, raw) in [
            (AD_STORAGE_KEY, input.ad_storage),
            (ANALYTICS_STORAGE_KEY, input.analytics_storage),
        ] {
            let Some(raw) = raw else {
                continue;
            };
            let status = ConsentStatus::sanitize(&raw);
            if status.as_str() != raw {
                debug!("Coerced {} value {:?} to {}", key, raw, status);
            }
            self.store.set(key, Value::String(status.as_str().to_string()))?;
        }

        let decision = self.load();
        info!(
            "Consent settings saved: ad_storage={}, analytics_storage={}",
            decision.ad_storage, decision.analytics_storage
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MockOptionStore;
    use serde_json::json;

    #[test]
    fn test_load_defaults_to_granted() {
        let use_case = ConsentSettingsUseCase::new(Arc::new(MockOptionStore::default()));
        assert_eq!(use_case.load(), ConsentDecision::default());
    }

    #[test]
    fn test_load_invalid_stored_value() {
        let store = MockOptionStore::default()
            .with(AD_STORAGE_KEY, json!("Denied"))
            .with(ANALYTICS_STORAGE_KEY, json!("denied"));
        let decision = ConsentSettingsUseCase::new(Arc::new(store)).load();
        assert_eq!(decision.ad_storage, ConsentStatus::Granted);
        assert_eq!(decision.analytics_storage, ConsentStatus::Denied);
    }

    #[test]
    fn test_update_sanitizes() {
        let store = Arc::new(MockOptionStore::default());
        let use_case = ConsentSettingsUseCase::new(store.clone());

        let decision = use_case
            .update(ConsentSettingsInput::new("true", "denied"))
            .unwrap();
        assert_eq!(decision.ad_storage, ConsentStatus::Granted);
        assert_eq!(decision.analytics_storage, ConsentStatus::Denied);
        assert_eq!(store.get(AD_STORAGE_KEY), Some(json!("granted")));
        assert_eq!(store.get(ANALYTICS_STORAGE_KEY), Some(json!("denied")));
    }

    #[test]
    fn test_partial_update_keeps_other_value() {
        let store = Arc::new(MockOptionStore::default().with(AD_STORAGE_KEY, json!("denied")));
        let use_case = ConsentSettingsUseCase::new(store);

        let decision = use_case
            .update(ConsentSettingsInput {
                ad_storage: None,
                analytics_storage: Some("denied".into()),
            })
            .unwrap();
        assert_eq!(decision, ConsentDecision::new(ConsentStatus::Denied, ConsentStatus::Denied));
    }
}
