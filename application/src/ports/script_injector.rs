//! Script injection port
//!
//! Defines how the consent script and its payload reach the page.

use consent_domain::ConsentPayload;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while enqueuing a script
#[derive(Error, Debug)]
pub enum InjectError {
    #[error("Script handle already enqueued: {0}")]
    AlreadyEnqueued(String),

    #[error("Failed to encode payload: {0}")]
    Payload(String),
}

/// A client-side script resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptAsset {
    /// Unique handle the script is registered under
    pub handle: String,
    /// Script URL
    pub src: String,
    /// Version appended for cache busting
    pub version: String,
    /// Load in the page footer instead of the head
    pub in_footer: bool,
}

impl Default for ScriptAsset {
    fn default() -> Self {
        Self {
            handle: "clarity-consent-layer".to_string(),
            src: "js/clarity-consent-layer.js".to_string(),
            version: "2.0.1".to_string(),
            in_footer: true,
        }
    }
}

/// Enqueues a script with an attached data payload
///
/// The payload must be readable by the script as the global
/// [`PAYLOAD_GLOBAL`](consent_domain::PAYLOAD_GLOBAL) object.
pub trait ScriptInjector: Send + Sync {
    fn enqueue(&self, asset: &ScriptAsset, payload: &ConsentPayload) -> Result<(), InjectError>;
}
