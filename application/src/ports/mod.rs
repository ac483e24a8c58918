//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod consent_host;
pub mod option_store;
pub mod plugin_registry;
pub mod script_injector;
