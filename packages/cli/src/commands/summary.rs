use super::find_record_files;
use crate::config::Config;
use anyhow::Result;
use automotion_vision::{ReportOptions, ReportRecord};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Output directory holding json/ and img/ (defaults to the config value)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: Format,
}

/// One failed session as listed by the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureSummary {
    pub file: String,
    pub element_name: String,
    pub scenario: String,
    pub time_execution: String,
    pub messages: Vec<String>,
}

pub fn summary(args: SummaryArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let output_dir = args.dir.unwrap_or_else(|| config.get_output_dir(cwd));
    let failures = collect_failures(&ReportOptions::new(&output_dir).json_dir());

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&failures)?),
        Format::Text => print_text(&failures),
    }
    Ok(())
}

/// Read every failed record, skipping files that are not records
pub fn collect_failures(json_dir: &Path) -> Vec<FailureSummary> {
    let mut failures = Vec::new();
    for path in find_record_files(json_dir) {
        let record = match std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Ok(serde_json::from_str::<ReportRecord>(&content)?))
        {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable record");
                continue;
            }
        };
        if !record.error {
            continue;
        }

        failures.push(FailureSummary {
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            element_name: record.element_name,
            scenario: record.scenario,
            time_execution: record.time_execution,
            messages: record.details.into_iter().map(|d| d.reason.message).collect(),
        });
    }
    failures
}

fn print_text(failures: &[FailureSummary]) {
    if failures.is_empty() {
        println!("✨ {} No failed validations", "Done".green().bold());
        return;
    }

    for failure in failures {
        println!(
            "{} {} {} ({})",
            "✗".red(),
            failure.element_name.bold(),
            format!("[{}]", failure.scenario).dimmed(),
            failure.time_execution
        );
        for message in &failure.messages {
            println!("   - {}", message);
        }
        println!("   {}", failure.file.dimmed());
        println!();
    }

    let errors: usize = failures.iter().map(|f| f.messages.len()).sum();
    println!(
        "{} {} failed validations, {} errors",
        "Summary:".red().bold(),
        failures.len(),
        errors
    );
}
