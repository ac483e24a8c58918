//! Project ID validation
//!
//! A Clarity project ID is a short alphanumeric token such as `aq9itx5whc`.
//! The rules here are syntactic only; nothing is checked against Clarity itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum accepted project ID length (inclusive)
pub const MIN_PROJECT_ID_LEN: usize = 8;

/// Maximum accepted project ID length (inclusive)
pub const MAX_PROJECT_ID_LEN: usize = 15;

/// Words that look like IDs inside serialized settings but never are.
const EXCLUDED_WORDS: [&str; 3] = ["switching", "wordpress", "settings"];

/// Check whether a candidate string is an acceptable project ID.
///
/// All of the following must hold:
/// - length between 8 and 15 characters inclusive
/// - ASCII alphanumeric characters only
/// - at least one digit
/// - not one of the excluded words (case-insensitive)
pub fn is_valid_project_id(candidate: &str) -> bool {
    let len = candidate.len();
    if !(MIN_PROJECT_ID_LEN..=MAX_PROJECT_ID_LEN).contains(&len) {
        return false;
    }

    if !candidate.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }

    if !candidate.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }

    let lowered = candidate.to_ascii_lowercase();
    !EXCLUDED_WORDS.contains(&lowered.as_str())
}

/// A validated Clarity project ID (Value Object)
///
/// Can only be obtained through [`ProjectId::parse`], so holding one
/// guarantees [`is_valid_project_id`] returned true for its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    /// Validate and wrap a candidate, returning `None` if it is rejected
    pub fn parse(candidate: &str) -> Option<Self> {
        is_valid_project_id(candidate).then(|| Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = crate::core::error::DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_project_id(&value) {
            Ok(Self(value))
        } else {
            Err(crate::core::error::DomainError::InvalidProjectId(value))
        }
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ProjectId {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}
