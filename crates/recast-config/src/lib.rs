//! Mapping config loading: YAML documents in, validated [`MappingSpec`]s out.

pub mod error;
pub mod loader;
pub mod resolve;

pub use error::{ConfigError, Result};
pub use loader::load;
pub use resolve::resolve_spec_path;

pub use recast_model::MappingSpec;
