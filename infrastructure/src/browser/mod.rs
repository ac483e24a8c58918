//! Browser-side adapters

mod simulated_page;

pub use simulated_page::{DispatchedEvent, EntryPoint, Invocation, SimulatedPage};
