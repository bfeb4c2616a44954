use serde::Deserialize;
use std::path::PathBuf;

/// Settings for one analyzer run.
///
/// Every key is optional in the TOML file; missing keys keep the defaults
/// below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of rows kept in the report, 0 = unlimited.
    pub report_size: usize,

    /// Where report artifacts are written.
    pub report_dir: PathBuf,

    /// Directory scanned for access logs.
    pub log_dir: PathBuf,

    /// Report template carrying a `$table_json` placeholder.
    pub template: PathBuf,

    /// Parse-failure ratio above which the run refuses to render.
    pub error_max_ratio: f64,

    /// Diagnostic log destination; `None` logs to the console.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_size: 1000,
            report_dir: PathBuf::from("./reports"),
            log_dir: PathBuf::from("./log"),
            template: PathBuf::from("./report.html"),
            error_max_ratio: 0.5,
            log_file: None,
        }
    }
}
