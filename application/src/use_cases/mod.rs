//! Use cases (application services)
//!
//! Server side: detection, render-time injection, settings, status and
//! uninstall. Browser side: the consent propagation client.

pub mod consent_settings;
pub mod detect_project_id;
pub mod inject_consent;
pub mod propagate_consent;
pub mod setup_status;
pub mod uninstall;

#[cfg(test)]
pub(crate) mod test_support;
