use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the diagnostic logging system
///
/// Filtering comes from the environment (defaults to "info" if not set).
/// With a `log_file` destination, output goes through a non-blocking file
/// writer with ANSI colors disabled; the returned guard must stay alive for
/// the process lifetime or buffered lines are dropped on exit.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();

            Ok(Some(guard))
        }
        None => {
            fmt().with_env_filter(filter).init();
            Ok(None)
        }
    }
}
