use super::find_record_files;
use crate::config::Config;
use anyhow::Result;
use automotion_vision::{HtmlReportBuilder, ReportOptions};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output directory holding json/ and img/ (defaults to the config value)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Report file name without extension
    #[arg(short, long)]
    pub name: Option<String>,
}

pub fn report(args: ReportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let output_dir = args.dir.unwrap_or_else(|| config.get_output_dir(cwd));
    let name = args.name.unwrap_or(config.report_name);

    println!("📊 {} Automotion report", "Building".green().bold());
    println!("   Output: {}", output_dir.display());
    println!();

    let path = build_report(&output_dir, &name)?;

    println!("✨ {} Report written", "Done".green().bold());
    println!("   {}", path.display());
    Ok(())
}

/// Build `<output_dir>/<name>.html` from every record under `json/`
pub fn build_report(output_dir: &Path, name: &str) -> Result<PathBuf> {
    let options = ReportOptions::new(output_dir);
    let records = find_record_files(&options.json_dir());
    if records.is_empty() {
        return Err(anyhow::anyhow!(
            "No validation records found in {}",
            options.json_dir().display()
        ));
    }
    debug!(count = records.len(), "Found records");

    let path = HtmlReportBuilder::new(options).build(name, &records)?;
    Ok(path)
}
