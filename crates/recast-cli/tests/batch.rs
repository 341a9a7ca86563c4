//! Batch pipeline behavior against real directories.

use std::path::Path;

use tempfile::TempDir;

use recast_cli::cli::ConvertArgs;
use recast_cli::commands::run_convert;
use recast_cli::pipeline::{PlannedJob, REPORT_FILE_NAME, run_batch};
use recast_model::{TableJob, TableOutcome};
use recast_transform::compile;

const CONFIG: &str = concat!(
    "rules:\n",
    "  - target: id\n",
    "    source: ID\n",
    "    position: 0\n",
    "  - target: status\n",
    "    default: active\n",
    "    position: 1\n",
);

fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write file");
}

fn convert_args(input_dir: &Path, config: &Path, output_dir: &Path) -> ConvertArgs {
    ConvertArgs {
        input_dir: input_dir.to_path_buf(),
        config: config.to_path_buf(),
        output_dir: Some(output_dir.to_path_buf()),
        dry_run: false,
        no_report: false,
    }
}

#[test]
fn converts_a_directory_of_tables() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    std::fs::create_dir(&input).unwrap();
    write_file(&input, "orders.csv", "ID,Extra\n42,ignored\n43,also\n");
    write_file(&input, "users.csv", "Name,ID\nalice,7\n");
    write_file(&input, "readme.txt", "not a table\n");
    let config = root.path().join("map.yaml");
    std::fs::write(&config, CONFIG).unwrap();

    let report = run_convert(&convert_args(&input, &config, &output))
        .expect("convert")
        .expect("not a dry run");

    assert_eq!(report.converted(), 2);
    assert_eq!(report.failed(), 0);
    assert!(!report.batch_failed());

    let orders = std::fs::read_to_string(output.join("orders.csv")).unwrap();
    assert_eq!(orders, "id,status\n42,active\n43,active\n");
    let users = std::fs::read_to_string(output.join("users.csv")).unwrap();
    assert_eq!(users, "id,status\n7,active\n");
    assert!(output.join(REPORT_FILE_NAME).is_file());
}

#[test]
fn rerunning_produces_byte_identical_outputs() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    std::fs::create_dir(&input).unwrap();
    write_file(&input, "orders.csv", "ID\n1\n2\n3\n");
    let config = root.path().join("map.yaml");
    std::fs::write(&config, CONFIG).unwrap();

    run_convert(&convert_args(&input, &config, &output)).expect("first run");
    let first = std::fs::read(output.join("orders.csv")).unwrap();
    run_convert(&convert_args(&input, &config, &output)).expect("second run");
    let second = std::fs::read(output.join("orders.csv")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_unreadable_table_does_not_abort_the_batch() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    std::fs::create_dir(&input).unwrap();
    write_file(&input, "a.csv", "ID\n1\n");
    // A directory with a table name: discovered jobs can still point at it,
    // and opening it as a table fails.
    std::fs::create_dir(input.join("b.csv")).unwrap();
    write_file(&input, "c.csv", "ID\n3\n");

    let spec = {
        let config = root.path().join("map.yaml");
        std::fs::write(&config, CONFIG).unwrap();
        recast_config::load(&config).expect("load config")
    };
    let plan = compile(&spec);

    let jobs = vec!["a.csv", "b.csv", "c.csv"]
        .into_iter()
        .map(|name| PlannedJob {
            job: TableJob::new(input.join(name), &output),
            plan: Some(&plan),
            skip_reason: None,
        })
        .collect();

    let report = run_batch(jobs, &output).expect("run batch");

    assert_eq!(report.converted(), 2);
    assert_eq!(report.failed(), 1);
    assert!(!report.batch_failed());
    assert!(output.join("a.csv").is_file());
    assert!(output.join("c.csv").is_file());
    let failed = report
        .outcomes
        .iter()
        .find(|o| matches!(o, TableOutcome::Failed { .. }))
        .expect("failed outcome");
    assert_eq!(failed.table(), "b.csv");
}

#[test]
fn missing_copy_sources_are_counted_not_fatal() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    std::fs::create_dir(&input).unwrap();
    write_file(&input, "t.csv", "Other\nx\ny\n");
    let config = root.path().join("map.yaml");
    std::fs::write(&config, CONFIG).unwrap();

    let report = run_convert(&convert_args(&input, &config, &output))
        .expect("convert")
        .expect("not a dry run");

    let TableOutcome::Converted(table_report) = &report.outcomes[0] else {
        panic!("expected converted outcome");
    };
    assert_eq!(table_report.rows_written, 2);
    assert_eq!(table_report.missing_fields, 2);
    let written = std::fs::read_to_string(output.join("t.csv")).unwrap();
    assert_eq!(written, "id,status\n,active\n,active\n");
}

#[test]
fn config_directory_resolves_per_table_and_skips_unmatched() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    let config_dir = root.path().join("config");
    std::fs::create_dir(&input).unwrap();
    std::fs::create_dir(&config_dir).unwrap();
    write_file(&input, "orders.csv", "ID\n1\n");
    write_file(&input, "extra.csv", "ID\n2\n");
    write_file(&config_dir, "orders.yaml", CONFIG);

    let report = run_convert(&convert_args(&input, &config_dir, &output))
        .expect("convert")
        .expect("not a dry run");

    assert_eq!(report.converted(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.failed(), 0);
    assert!(output.join("orders.csv").is_file());
    assert!(!output.join("extra.csv").exists());
}

#[test]
fn missing_input_directory_is_a_precondition_failure() {
    let root = TempDir::new().unwrap();
    let config = root.path().join("map.yaml");
    std::fs::write(&config, CONFIG).unwrap();
    let args = convert_args(
        &root.path().join("no-such-dir"),
        &config,
        &root.path().join("out"),
    );
    assert!(run_convert(&args).is_err());
}

#[test]
fn invalid_config_fails_before_any_table_is_written() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    std::fs::create_dir(&input).unwrap();
    write_file(&input, "a.csv", "ID\n1\n");
    let config = root.path().join("map.yaml");
    std::fs::write(&config, "rules:\n  - {target: id}\n").unwrap();

    assert!(run_convert(&convert_args(&input, &config, &output)).is_err());
    assert!(!output.join("a.csv").exists());
}
