//! Consent host port
//!
//! The browser page as seen by the consent propagation client: the
//! injected payload, the page context, and the Clarity global.

use async_trait::async_trait;
use consent_domain::{ConsentCommandArgs, ConsentPayload};
use thiserror::Error;

/// Error raised by the Clarity entry point
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("Clarity entry point is not callable")]
    NotCallable,

    #[error("Clarity call threw: {0}")]
    Threw(String),
}

/// Browser environment the consent client runs in
#[async_trait]
pub trait ConsentHost: Send + Sync {
    /// The payload global injected with the script, if any
    async fn payload(&self) -> Option<ConsentPayload>;

    /// Whether the page is an administrative (back-office) page
    async fn is_admin_context(&self) -> bool;

    /// Whether `window.clarity` currently exists as a function
    async fn entry_point_available(&self) -> bool;

    /// Call `window.clarity(command, args)`
    async fn invoke(&self, command: &str, args: &ConsentCommandArgs)
    -> Result<(), InvocationError>;

    /// Dispatch the completion event on the document
    async fn dispatch_event(&self, name: &str, detail: &ConsentPayload);
}
