//! Detection results and the page state derived from them.

pub mod provenance;
pub mod result;
pub mod setup_state;

pub use provenance::Provenance;
pub use result::DetectionResult;
pub use setup_state::SetupState;
