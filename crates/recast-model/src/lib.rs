pub mod error;
pub mod plan;
pub mod report;
pub mod rule;

use std::collections::BTreeMap;

pub use error::SpecError;
pub use plan::{FillStrategy, PlannedColumn, TransformPlan};
pub use report::{BatchReport, TableJob, TableOutcome, TableReport};
pub use rule::{MappingRule, MappingSpec};

/// One input record: a mapping from input column name to raw cell value.
///
/// Produced transiently per record; transformation never mutates a row in
/// place, it builds a fresh output row.
pub type Row = BTreeMap<String, String>;
