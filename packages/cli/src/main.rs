mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{report, summary, ReportArgs, SummaryArgs};

/// Automotion CLI - reports for UI layout validations
#[derive(Parser, Debug)]
#[command(name = "automotion")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the HTML report from persisted validation records
    Report(ReportArgs),

    /// List failed validations and their messages
    Summary(SummaryArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Report(args) => report(args, &cwd),
            Command::Summary(args) => summary(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
