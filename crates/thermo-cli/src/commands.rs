use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use thermo_core::run_with_options;
use thermo_model::{PipelineOptions, RunReport};

use crate::cli::RunArgs;
use crate::summary::profile_table;

pub fn run_profiles() -> Result<()> {
    println!("{}", profile_table());
    Ok(())
}

pub fn run_rename(args: &RunArgs) -> Result<RunReport> {
    let span = info_span!("rename", folder = %args.folder.display());
    let _guard = span.enter();

    let options = match &args.rules {
        Some(path) => PipelineOptions::from_json_file(path)
            .with_context(|| format!("load rules from {}", path.display()))?,
        None => PipelineOptions::default(),
    };

    let report = run_with_options(&args.folder, args.profile, &options)
        .with_context(|| format!("rename files in {}", args.folder.display()))?;

    if let Some(path) = &args.report_json {
        let json = serde_json::to_string_pretty(&report).context("serialize run report")?;
        fs::write(path, json).with_context(|| format!("write report to {}", path.display()))?;
        info!(path = %path.display(), "run report written");
    }
    Ok(report)
}
