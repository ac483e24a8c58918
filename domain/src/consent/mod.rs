//! Consent values propagated to Clarity.

pub mod decision;
pub mod status;

pub use decision::{
    APPLIED_EVENT, CONSENT_COMMAND, ConsentCommandArgs, ConsentDecision, ConsentPayload,
    PAYLOAD_GLOBAL,
};
pub use status::ConsentStatus;
