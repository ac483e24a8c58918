//! Script injection adapters

mod tag_renderer;

pub use tag_renderer::{EnqueuedScript, Placement, ScriptTagRenderer};
