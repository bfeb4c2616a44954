use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filename prefix every analyzable access log must carry.
const LOG_NAME_PREFIX: &str = "nginx-access-ui.log-";

/// A discovered input log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    pub path: PathBuf,
    /// The `DDMMYYYY` code lifted from the filename.
    pub date_code: String,
    pub gzipped: bool,
}

/// Finds the most recent access log in `log_dir`.
///
/// Scans the directory non-recursively for regular files named
/// `nginx-access-ui.log-DDMMYYYY`, optionally suffixed `.gz`, and picks the
/// lexicographically greatest filename. The date code sorts day-first, so
/// ordering across month boundaries follows the raw string, not the
/// calendar.
///
/// Returns `None` when nothing in the directory matches the convention.
///
/// # Errors
///
/// Propagates I/O errors from reading the directory, including a missing or
/// unreadable `log_dir`.
pub fn find_latest_log(log_dir: &Path) -> io::Result<Option<LogSource>> {
    let mut newest: Option<(String, LogSource)> = None;

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some((date_code, gzipped)) = parse_log_name(name) else {
            continue;
        };

        let is_newer = match &newest {
            Some((best, _)) => name > best.as_str(),
            None => true,
        };

        if is_newer {
            newest = Some((
                name.to_string(),
                LogSource {
                    path: entry.path(),
                    date_code: date_code.to_string(),
                    gzipped,
                },
            ));
        }
    }

    Ok(newest.map(|(_, source)| source))
}

/// Splits a candidate filename into its date code and compression flag.
/// Anything outside the naming convention yields `None`.
fn parse_log_name(name: &str) -> Option<(&str, bool)> {
    let rest = name.strip_prefix(LOG_NAME_PREFIX)?;

    let (date_code, gzipped) = match rest.strip_suffix(".gz") {
        Some(date_code) => (date_code, true),
        None => (rest, false),
    };

    if date_code.len() == 8 && date_code.bytes().all(|b| b.is_ascii_digit()) {
        Some((date_code, gzipped))
    } else {
        None
    }
}
