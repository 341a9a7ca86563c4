//! Schema transformation: compile a mapping spec once, apply it per row.

pub mod planner;
pub mod transformer;

pub use planner::compile;
pub use transformer::{RowOutcome, apply};
