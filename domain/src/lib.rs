//! Domain layer for clarity-consent-auto
//!
//! This crate contains the pure detection rules and consent value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Project ID detection
//!
//! - **Validator**: syntactic rules a Clarity project ID must satisfy
//! - **Extractor**: best-effort scan of an arbitrary option value for an ID
//! - **Detection result**: the ID (if any) plus where it came from
//!
//! ## Consent
//!
//! - **Consent decision**: ad storage and analytics storage, each
//!   `granted` or `denied`
//! - **Consent payload**: the decision as delivered to the browser script

pub mod config;
pub mod consent;
pub mod core;
pub mod detection;
pub mod identifier;

// Re-export commonly used types
pub use config::{
    KeyKind, OutputFormat, OwnedKeyInfo,
    option_keys::{
        AD_STORAGE_KEY, ANALYTICS_STORAGE_KEY, COMPANION_PLUGIN, KNOWN_CLARITY_OPTIONS,
        PRIOR_SAVE_KEY,
    },
    owned_keys,
};
pub use consent::{
    APPLIED_EVENT, CONSENT_COMMAND, ConsentCommandArgs, ConsentDecision, ConsentPayload,
    ConsentStatus, PAYLOAD_GLOBAL,
};
pub use core::error::DomainError;
pub use detection::{DetectionResult, Provenance, SetupState};
pub use identifier::{ProjectId, extract_project_id, is_empty_value, is_valid_project_id};
