//! Per-row application of a compiled plan.

use recast_model::{FillStrategy, Row, TransformPlan};

/// One transformed row plus what went missing while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// Output cells, exactly `plan.len()` of them, in plan order.
    pub cells: Vec<String>,
    /// Copy strategies whose source column was absent from this row.
    pub missing_fields: usize,
}

/// Applies a plan to one input row, producing one output row.
///
/// The output always has exactly `plan.len()` cells in plan order, whatever
/// columns the input row happened to carry. A copy whose source is absent
/// yields an empty cell and bumps `missing_fields`; it never fails. For
/// fallback strategies an absent key and a present-but-blank value are
/// treated identically: both take the default.
pub fn apply(plan: &TransformPlan, input: &Row) -> RowOutcome {
    let mut cells = Vec::with_capacity(plan.len());
    let mut missing_fields = 0usize;
    for column in plan.columns() {
        match &column.fill {
            FillStrategy::Copy { source } => match input.get(source) {
                Some(value) => cells.push(value.clone()),
                None => {
                    missing_fields += 1;
                    cells.push(String::new());
                }
            },
            FillStrategy::Constant { value } => cells.push(value.clone()),
            FillStrategy::CopyOrDefault { source, default } => {
                let present = input
                    .get(source)
                    .map(String::as_str)
                    .filter(|value| !value.trim().is_empty());
                match present {
                    Some(value) => cells.push(value.to_string()),
                    None => cells.push(default.clone()),
                }
            }
        }
    }
    RowOutcome {
        cells,
        missing_fields,
    }
}
