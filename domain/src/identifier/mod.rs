//! Project ID detection primitives.
//!
//! - [`validator`]: syntactic rules every accepted ID satisfies
//! - [`extractor`]: best-effort scan of an arbitrary option value

pub mod extractor;
pub mod validator;

pub use extractor::{extract_project_id, is_empty_value};
pub use validator::{MAX_PROJECT_ID_LEN, MIN_PROJECT_ID_LEN, ProjectId, is_valid_project_id};
