//! YAML mapping-config loading.
//!
//! A config document is an ordered collection of rule records:
//!
//! ```yaml
//! rules:
//!   - target: id
//!     source: ID
//!     position: 0
//!   - target: status
//!     default: active
//!     position: 1
//! ```
//!
//! A bare top-level list of records is accepted as well. Loading is pure
//! apart from reading the one file, and every structural problem surfaces
//! here rather than during row processing.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use recast_model::{MappingRule, MappingSpec};

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpecDocument {
    Wrapped { rules: Vec<RuleDocument> },
    Bare(Vec<RuleDocument>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleDocument {
    #[serde(alias = "target")]
    target_column: String,
    #[serde(default, alias = "source")]
    source_column: Option<String>,
    #[serde(default, alias = "default")]
    default_value: Option<String>,
    #[serde(default)]
    position: Option<i64>,
    #[serde(default)]
    description: Option<String>,
}

impl From<RuleDocument> for MappingRule {
    fn from(doc: RuleDocument) -> Self {
        Self {
            target_column: doc.target_column,
            source_column: doc.source_column,
            default_value: doc.default_value,
            position: doc.position,
            description: doc.description,
        }
    }
}

/// Reads a config file and produces a validated [`MappingSpec`].
///
/// # Errors
///
/// [`ConfigError::NotFound`] when the path does not resolve to a file,
/// [`ConfigError::Malformed`] when the document cannot be parsed into rule
/// records, and [`ConfigError::Invalid`] when a spec invariant is violated
/// (duplicate target, rule with neither source nor default, empty rule set).
pub fn load(path: &Path) -> Result<MappingSpec> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let document: SpecDocument =
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    let rules: Vec<MappingRule> = match document {
        SpecDocument::Wrapped { rules } | SpecDocument::Bare(rules) => {
            rules.into_iter().map(MappingRule::from).collect()
        }
    };
    let spec = MappingSpec::new(rules).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        config = %path.display(),
        rule_count = spec.len(),
        "loaded mapping spec"
    );
    Ok(spec)
}
