//! Declarative column-production rules.
//!
//! A [`MappingSpec`] is the parsed form of a transformation config: an
//! ordered set of [`MappingRule`]s describing how every output column is
//! produced. It is validated on construction and immutable afterwards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// One column-production instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Name of the column in the output layout. Unique across the spec.
    pub target_column: String,
    /// Input column to copy from, if any.
    pub source_column: Option<String>,
    /// Value used when the source is absent or no source is set.
    pub default_value: Option<String>,
    /// Explicit ordinal in the output layout. Falls back to declaration
    /// order when omitted; ties are broken by declaration order.
    pub position: Option<i64>,
    /// Free-text note carried from the config, ignored by execution.
    pub description: Option<String>,
}

impl MappingRule {
    /// The source column, treating blank names as unset.
    pub fn source(&self) -> Option<&str> {
        self.source_column
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// An ordered, validated set of mapping rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSpec {
    rules: Vec<MappingRule>,
}

impl MappingSpec {
    /// Validates the rule set and freezes it into a spec.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] when the rule list is empty, a target column is
    /// blank or duplicated, or a rule has neither a source column nor a
    /// default value.
    pub fn new(rules: Vec<MappingRule>) -> Result<Self, SpecError> {
        if rules.is_empty() {
            return Err(SpecError::Empty);
        }
        let mut seen = BTreeSet::new();
        for rule in &rules {
            let target = rule.target_column.trim();
            if target.is_empty() {
                return Err(SpecError::EmptyTarget);
            }
            if !seen.insert(target.to_string()) {
                return Err(SpecError::DuplicateTarget(target.to_string()));
            }
            if rule.source().is_none() && rule.default_value.is_none() {
                return Err(SpecError::Unfillable(target.to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Number of rules, which equals the output column count.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
