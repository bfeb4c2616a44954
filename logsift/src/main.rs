use anyhow::Context;
use clap::Parser;
use logsift_core::conf::load_config;
use logsift_core::logging::init_logging;
use logsift_core::pipeline::{self, RunOutcome};

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    version,
    about = "Logsift: ranked latency reports from nginx access logs"
)]
struct Cli {
    /// Path to a TOML config file; built-in defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Logging may not be up yet, so the failure goes to stderr directly.
            eprintln!("logsift: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let _guard =
        init_logging(config.log_file.as_deref()).context("failed to initialize logging")?;

    match pipeline::run(&config)? {
        RunOutcome::Reported { path, rows, .. } => {
            tracing::info!("report ready: {} ({rows} rows)", path.display());
        }
        // Both are already logged by the pipeline; a quiet exit is the point.
        RunOutcome::NoLogFile | RunOutcome::AlreadyReported { .. } => {}
    }

    Ok(())
}
