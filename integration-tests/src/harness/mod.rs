use flate2::Compression;
use flate2::write::GzEncoder;
use logsift_core::conf::Config;
use logsift_core::pipeline::{self, PipelineError, RunOutcome};
use serde_json::Value;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEMPLATE: &str = "<html><body><script>var table = $table_json;</script></body></html>";

/// One disposable analyzer environment: a log dir, a report dir and a
/// template, all living inside a temp dir that disappears with the value.
pub struct TestEnv {
    root: TempDir,
    pub config: Config,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let log_dir = root.path().join("log");
        let template = root.path().join("report.html");

        fs::create_dir(&log_dir).expect("create log dir");
        fs::write(&template, TEMPLATE).expect("write template");

        let config = Config {
            log_dir,
            report_dir: root.path().join("reports"),
            template,
            ..Config::default()
        };

        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn write_log(&self, date_code: &str, lines: &[String]) {
        let path = self
            .config
            .log_dir
            .join(format!("nginx-access-ui.log-{date_code}"));
        fs::write(path, lines.join("\n")).expect("write log");
    }

    pub fn write_gz_log(&self, date_code: &str, lines: &[String]) {
        let path = self
            .config
            .log_dir
            .join(format!("nginx-access-ui.log-{date_code}.gz"));
        let file = File::create(path).expect("create gz log");

        let mut encoder = GzEncoder::new(file, Compression::fast());
        encoder
            .write_all(lines.join("\n").as_bytes())
            .expect("write gz log");
        encoder.finish().expect("finish gz log");
    }

    pub fn run(&self) -> Result<RunOutcome, PipelineError> {
        pipeline::run(&self.config)
    }

    pub fn report_path(&self, date_code: &str) -> PathBuf {
        self.config
            .report_dir
            .join(format!("report-{date_code}.html"))
    }

    /// Reads a rendered report back and returns the substituted row array.
    pub fn report_rows(&self, date_code: &str) -> Vec<Value> {
        let html = fs::read_to_string(self.report_path(date_code)).expect("read report");
        let json = html
            .strip_prefix("<html><body><script>var table = ")
            .and_then(|rest| rest.strip_suffix(";</script></body></html>"))
            .expect("template framing");
        serde_json::from_str(json).expect("row json")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A well-formed access-log line for `path` with the given latency.
pub fn access_line(path: &str, request_time: f64) -> String {
    format!(
        "93.184.216.34 -  - [30/Jun/2017:08:15:27 +0300] \"GET {path} HTTP/1.1\" 200 927 \"-\" \"Mozilla/5.0 (X11; Linux x86_64)\" \"-\" \"1498713327-2190034393-4708-9752759\" \"dc7161be3\" {request_time}"
    )
}
