//! Spec compilation.
//!
//! Compiling happens once per spec, before any row is touched, so strategy
//! selection is never re-derived per row and validation stays independent of
//! what any one input row looks like.

use tracing::debug;

use recast_model::{FillStrategy, MappingRule, MappingSpec, PlannedColumn, TransformPlan};

/// Compiles a validated spec into an execution-ready plan.
///
/// Output order is a stable sort by `(position, declaration index)`:
/// explicit positions rank first, rules without one take their declaration
/// index, and ties keep declaration order. The same spec always compiles to
/// the same column order.
pub fn compile(spec: &MappingSpec) -> TransformPlan {
    let mut ordered: Vec<(i64, usize, &MappingRule)> = spec
        .rules()
        .iter()
        .enumerate()
        .map(|(index, rule)| (rule.position.unwrap_or(index as i64), index, rule))
        .collect();
    ordered.sort_by_key(|(position, index, _)| (*position, *index));

    let columns: Vec<PlannedColumn> = ordered
        .into_iter()
        .map(|(_, _, rule)| PlannedColumn {
            name: rule.target_column.trim().to_string(),
            fill: fill_strategy(rule),
        })
        .collect();
    debug!(column_count = columns.len(), "compiled transform plan");
    TransformPlan::new(columns)
}

fn fill_strategy(rule: &MappingRule) -> FillStrategy {
    match (rule.source(), rule.default_value.as_deref()) {
        (Some(source), None) => FillStrategy::Copy {
            source: source.to_string(),
        },
        (Some(source), Some(default)) => FillStrategy::CopyOrDefault {
            source: source.to_string(),
            default: default.to_string(),
        },
        (None, Some(value)) => FillStrategy::Constant {
            value: value.to_string(),
        },
        // Unreachable: MappingSpec::new rejects rules with neither.
        (None, None) => FillStrategy::Constant {
            value: String::new(),
        },
    }
}
