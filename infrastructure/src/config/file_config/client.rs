//! Browser client configuration from TOML (`[client]` section)

use super::ConfigValidationError;
use consent_application::PollParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Delay between checks for `window.clarity`, in milliseconds
    pub poll_interval_ms: u64,
    /// Number of checks before giving up
    pub max_attempts: u32,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        let defaults = PollParams::default();
        Self {
            poll_interval_ms: defaults.interval.as_millis() as u64,
            max_attempts: defaults.max_attempts,
        }
    }
}

impl FileClientConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.poll_interval_ms == 0 {
            issues.push(ConfigValidationError::ZeroPollInterval);
        }
        if self.max_attempts == 0 {
            issues.push(ConfigValidationError::ZeroMaxAttempts);
        }
        issues
    }

    pub fn to_poll_params(&self) -> PollParams {
        PollParams::new(Duration::from_millis(self.poll_interval_ms), self.max_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_poll_params() {
        assert_eq!(FileClientConfig::default().to_poll_params(), PollParams::default());
    }
}
