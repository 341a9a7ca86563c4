use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use recast_config::{load, resolve_spec_path};
use recast_ingest::list_table_files;
use recast_model::{BatchReport, TableJob, TransformPlan};
use recast_transform::compile;

use crate::cli::{CheckArgs, ConvertArgs};
use crate::pipeline::{PlannedJob, run_batch, write_batch_report_json};
use crate::summary::print_plan;

/// Validate a config and show its compiled plan.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let spec = load(&args.config)?;
    let plan = compile(&spec);
    println!("Config: {}", args.config.display());
    print_plan(&plan);
    Ok(())
}

/// Run the batch. Returns `None` for a dry run (nothing executed).
pub fn run_convert(args: &ConvertArgs) -> Result<Option<BatchReport>> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.join("output"));

    // Precondition: input directory must exist; discovery is stable-sorted.
    let files = list_table_files(&args.input_dir)
        .with_context(|| format!("discover tables in {}", args.input_dir.display()))?;
    let jobs: Vec<TableJob> = files
        .into_iter()
        .map(|input| TableJob::new(input, &output_dir))
        .collect();
    info!(
        input_dir = %args.input_dir.display(),
        output_dir = %output_dir.display(),
        table_count = jobs.len(),
        "discovered tables"
    );

    // Load and compile every config up front, before any table work, so an
    // invalid config can never abort a half-written batch.
    let (plans, assignments) = resolve_plans(args, &jobs)?;

    if args.dry_run {
        print_dry_run(&jobs, &plans, &assignments);
        return Ok(None);
    }

    let planned: Vec<PlannedJob<'_>> = jobs
        .into_iter()
        .zip(assignments)
        .map(|(job, assignment)| match assignment {
            Ok(index) => PlannedJob {
                job,
                plan: Some(&plans[index]),
                skip_reason: None,
            },
            Err(reason) => PlannedJob {
                job,
                plan: None,
                skip_reason: Some(reason),
            },
        })
        .collect();

    let report = run_batch(planned, &output_dir)?;
    if !args.no_report {
        let path = write_batch_report_json(&output_dir, &report)?;
        debug!(report = %path.display(), "batch report written");
    }
    Ok(Some(report))
}

/// Per job: an index into the returned plan list, or the reason no plan
/// applies. A config file applies to every table; a config directory is
/// resolved per table stem, with distinct files compiled once each.
fn resolve_plans(
    args: &ConvertArgs,
    jobs: &[TableJob],
) -> Result<(Vec<TransformPlan>, Vec<std::result::Result<usize, String>>)> {
    let mut plans = Vec::new();
    let mut assignments = Vec::with_capacity(jobs.len());

    if args.config.is_dir() {
        let mut by_path: BTreeMap<PathBuf, usize> = BTreeMap::new();
        for job in jobs {
            let stem = job.table_stem();
            match resolve_spec_path(&args.config, &stem) {
                Some(path) => {
                    let index = match by_path.get(&path) {
                        Some(index) => *index,
                        None => {
                            let spec = load(&path)?;
                            plans.push(compile(&spec));
                            by_path.insert(path, plans.len() - 1);
                            plans.len() - 1
                        }
                    };
                    assignments.push(Ok(index));
                }
                None => assignments.push(Err(format!("no mapping config for '{stem}'"))),
            }
        }
    } else {
        let spec = load(&args.config)?;
        plans.push(compile(&spec));
        assignments.extend(jobs.iter().map(|_| Ok(0)));
    }

    Ok((plans, assignments))
}

fn print_dry_run(
    jobs: &[TableJob],
    plans: &[TransformPlan],
    assignments: &[std::result::Result<usize, String>],
) {
    println!("Dry run: {} table(s) discovered", jobs.len());
    for (job, assignment) in jobs.iter().zip(assignments) {
        match assignment {
            Ok(index) => println!(
                "  {} -> {} ({} columns)",
                job.input.display(),
                job.output.display(),
                plans[*index].len()
            ),
            Err(reason) => println!("  {} skipped: {reason}", job.input.display()),
        }
    }
}
