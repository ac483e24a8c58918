//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project ID: {0}")]
    InvalidProjectId(String),

    #[error("Invalid consent status: {0}")]
    InvalidConsentStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_project_id_display() {
        let error = DomainError::InvalidProjectId("settings".to_string());
        assert_eq!(error.to_string(), "Invalid project ID: settings");
    }
}
