use crate::analyze::{self, Aggregation};
use crate::conf::Config;
use crate::pipeline::error::PipelineError;
use crate::report;

use std::fs;
use std::path::PathBuf;

/// How one pipeline invocation ended. Only [`PipelineError`] conditions are
/// failures; every variant here is a clean stop.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The log directory held nothing matching the naming convention.
    NoLogFile,

    /// A report for the discovered date already exists; nothing was parsed
    /// and the artifact was left untouched.
    AlreadyReported { path: PathBuf },

    /// A report was written.
    Reported {
        path: PathBuf,
        rows: usize,
        parse_errors: u64,
    },
}

/// Runs one full analysis pass: discover the newest log, stream it into
/// per-path statistics, check the parse-failure gate, render the report.
///
/// The report is written only after the entire log has been consumed and
/// the gate has passed; there is no partial artifact on any failure path.
pub fn run(config: &Config) -> Result<RunOutcome, PipelineError> {
    let source =
        analyze::find_latest_log(&config.log_dir).map_err(|e| PipelineError::ScanLogDir {
            path: config.log_dir.clone(),
            source: e,
        })?;

    let Some(source) = source else {
        tracing::info!("no access log found in {}", config.log_dir.display());
        return Ok(RunOutcome::NoLogFile);
    };

    let report_path = config
        .report_dir
        .join(format!("report-{}.html", source.date_code));
    if report_path.exists() {
        tracing::info!(
            "report {} already exists, nothing to do",
            report_path.display()
        );
        return Ok(RunOutcome::AlreadyReported { path: report_path });
    }

    tracing::info!("analyzing {}", source.path.display());

    let reader = analyze::open_log(&source).map_err(|e| PipelineError::ReadLog {
        path: source.path.clone(),
        source: e,
    })?;
    let agg = analyze::aggregate(reader).map_err(|e| PipelineError::ReadLog {
        path: source.path.clone(),
        source: e,
    })?;

    check_gate(&agg, config.error_max_ratio)?;

    let mut rows = analyze::build_summary(&agg.stats);
    if config.report_size > 0 {
        rows.truncate(config.report_size);
    }

    fs::create_dir_all(&config.report_dir).map_err(|e| PipelineError::CreateReportDir {
        path: config.report_dir.clone(),
        source: e,
    })?;
    report::render_report(&rows, &config.template, &report_path)?;

    tracing::info!(
        "wrote {}: {} rows, {} of {} lines skipped",
        report_path.display(),
        rows.len(),
        agg.parse_errors,
        agg.total_lines
    );

    Ok(RunOutcome::Reported {
        path: report_path,
        rows: rows.len(),
        parse_errors: agg.parse_errors,
    })
}

/// The trust gate: the share of lines that failed to parse must stay within
/// the configured limit before anything is rendered.
///
/// The denominator is the distinct-path count, not the raw line count.
/// With no paths at all, any parse failure trips the gate.
pub(crate) fn check_gate(agg: &Aggregation, error_max_ratio: f64) -> Result<(), PipelineError> {
    if agg.parse_errors == 0 {
        return Ok(());
    }

    let ratio = if agg.stats.is_empty() {
        f64::INFINITY
    } else {
        agg.parse_errors as f64 / agg.stats.len() as f64
    };

    if ratio > error_max_ratio {
        tracing::error!(
            "parse failure ratio {ratio:.3} exceeds the limit {error_max_ratio:.3}, not rendering"
        );
        return Err(PipelineError::QualityGate {
            ratio,
            max: error_max_ratio,
        });
    }

    Ok(())
}
