//! Poll parameters - how long the browser client waits for Clarity.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Interval and cap of the entry point availability checks.
///
/// The default waits up to 10 seconds: 100 checks, 100 ms apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollParams {
    /// Delay between two checks
    pub interval: Duration,
    /// Maximum number of scheduled checks (the immediate check is not counted)
    pub max_attempts: u32,
}

impl Default for PollParams {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 100,
        }
    }
}

impl PollParams {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Total time covered by the scheduled checks
    pub fn window(&self) -> Duration {
        self.interval * self.max_attempts
    }
}
