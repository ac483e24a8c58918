//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

pub mod option_keys;
mod output_format;

pub use option_keys::{KeyKind, OwnedKeyInfo, owned_keys};
pub use output_format::OutputFormat;
