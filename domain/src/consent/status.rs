//! Consent status value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Consent state for a single storage category.
///
/// Only two values exist; anything else written to the settings is
/// coerced to [`ConsentStatus::Granted`] by [`ConsentStatus::sanitize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    #[default]
    Granted,
    Denied,
}

impl ConsentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentStatus::Granted => "granted",
            ConsentStatus::Denied => "denied",
        }
    }

    /// Coerce arbitrary settings input into a consent status.
    ///
    /// Surrounding whitespace is stripped like any text field; the result
    /// must then be exactly `"granted"` or `"denied"` (case-sensitive),
    /// otherwise the default `granted` is returned.
    pub fn sanitize(input: &str) -> Self {
        match input.trim() {
            "denied" => ConsentStatus::Denied,
            _ => ConsentStatus::Granted,
        }
    }

    /// Sanitize a stored option value, which may not be a string at all.
    pub fn from_option_value(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::String(s)) => Self::sanitize(s),
            _ => ConsentStatus::Granted,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, ConsentStatus::Granted)
    }
}

impl fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConsentStatus {
    type Err = DomainError;

    /// Strict parse, used where invalid input should be reported instead of coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(ConsentStatus::Granted),
            "denied" => Ok(ConsentStatus::Denied),
            _ => Err(DomainError::InvalidConsentStatus(s.to_string())),
        }
    }
}
