//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DetectionSettings`]: which option keys and plugin the detection chain consults
//! - [`PollParams`]: timing of the browser-side wait for Clarity

pub mod detection_settings;
pub mod poll_params;

pub use detection_settings::DetectionSettings;
pub use poll_params::PollParams;
