use thiserror::Error;

/// Violations of the mapping-spec invariants.
///
/// These are always detected when a [`crate::MappingSpec`] is constructed,
/// never lazily during row processing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("mapping spec contains no rules")]
    Empty,
    #[error("mapping rule has an empty target column")]
    EmptyTarget,
    #[error("duplicate target column '{0}'")]
    DuplicateTarget(String),
    #[error("rule for '{0}' has neither a source column nor a default value")]
    Unfillable(String),
}
