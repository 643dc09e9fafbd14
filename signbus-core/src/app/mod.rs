//! Application state and route dispatch

pub mod context;
pub mod selection;

pub use context::{AppContext, ApplyError, ApplyReport, SignTarget};
pub use selection::Selection;
