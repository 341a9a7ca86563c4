//! Per-table config resolution inside a config directory.
//!
//! When the caller points at a directory rather than a single config file,
//! each table picks its config by naming convention, most specific first:
//! `<table>.yaml`, then `<table>_config.yaml`, then `default.yaml`.
//! The `.yml` spelling is accepted for each pattern.

use std::path::{Path, PathBuf};

use tracing::debug;

const EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Finds the config file governing `table_stem`, or `None` when the
/// directory holds nothing applicable.
pub fn resolve_spec_path(config_dir: &Path, table_stem: &str) -> Option<PathBuf> {
    let names = [
        table_stem.to_string(),
        format!("{table_stem}_config"),
        "default".to_string(),
    ];
    for name in &names {
        for extension in EXTENSIONS {
            let candidate = config_dir.join(format!("{name}.{extension}"));
            if candidate.is_file() {
                debug!(
                    table = table_stem,
                    config = %candidate.display(),
                    "resolved table config"
                );
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn config_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        for name in files {
            std::fs::write(dir.path().join(name), "rules: []\n").expect("write config");
        }
        dir
    }

    #[test]
    fn exact_name_wins_over_suffix_and_default() {
        let dir = config_dir(&["orders.yaml", "orders_config.yaml", "default.yaml"]);
        let resolved = resolve_spec_path(dir.path(), "orders").expect("resolved");
        assert_eq!(resolved, dir.path().join("orders.yaml"));
    }

    #[test]
    fn falls_back_to_config_suffix_then_default() {
        let dir = config_dir(&["orders_config.yaml", "default.yaml"]);
        let resolved = resolve_spec_path(dir.path(), "orders").expect("resolved");
        assert_eq!(resolved, dir.path().join("orders_config.yaml"));

        let resolved = resolve_spec_path(dir.path(), "customers").expect("resolved");
        assert_eq!(resolved, dir.path().join("default.yaml"));
    }

    #[test]
    fn accepts_yml_spelling() {
        let dir = config_dir(&["orders.yml"]);
        let resolved = resolve_spec_path(dir.path(), "orders").expect("resolved");
        assert_eq!(resolved, dir.path().join("orders.yml"));
    }

    #[test]
    fn none_when_nothing_matches() {
        let dir = config_dir(&[]);
        assert_eq!(resolve_spec_path(dir.path(), "orders"), None);
    }
}
