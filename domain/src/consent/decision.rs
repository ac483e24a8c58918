//! Consent decision, browser payload and Clarity command arguments

use super::status::ConsentStatus;
use serde::{Deserialize, Serialize};

/// Clarity command verb for the v2 consent API
pub const CONSENT_COMMAND: &str = "consentv2";

/// Name of the global object the payload is exposed as in the browser
pub const PAYLOAD_GLOBAL: &str = "clarityConsent";

/// Name of the DOM event fired once consent has been applied
pub const APPLIED_EVENT: &str = "clarityConsentApplied";

/// The two consent values configured by the site owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsentDecision {
    pub ad_storage: ConsentStatus,
    pub analytics_storage: ConsentStatus,
}

impl ConsentDecision {
    pub fn new(ad_storage: ConsentStatus, analytics_storage: ConsentStatus) -> Self {
        Self {
            ad_storage,
            analytics_storage,
        }
    }

    /// Payload handed to the browser script
    pub fn payload(&self) -> ConsentPayload {
        ConsentPayload {
            ad_storage: self.ad_storage,
            analytics_storage: self.analytics_storage,
        }
    }
}

/// Consent decision as seen by the browser script.
///
/// Serialized as `{"adStorage": "...", "analyticsStorage": "..."}`; this is
/// also the detail carried by the completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentPayload {
    pub ad_storage: ConsentStatus,
    pub analytics_storage: ConsentStatus,
}

impl ConsentPayload {
    /// Arguments for `clarity("consentv2", ...)`
    pub fn command_args(&self) -> ConsentCommandArgs {
        ConsentCommandArgs {
            ad_storage: self.ad_storage,
            analytics_storage: self.analytics_storage,
        }
    }

    pub fn decision(&self) -> ConsentDecision {
        ConsentDecision::new(self.ad_storage, self.analytics_storage)
    }
}

/// Argument object of the Clarity consent call.
///
/// Clarity expects the unusual `ad_Storage` / `analytics_Storage` casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentCommandArgs {
    #[serde(rename = "ad_Storage")]
    pub ad_storage: ConsentStatus,
    #[serde(rename = "analytics_Storage")]
    pub analytics_storage: ConsentStatus,
}
