use crate::report::RenderError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    // IO
    #[error("failed to scan log directory {path}: {source}")]
    ScanLogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create report directory {path}: {source}")]
    CreateReportDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Trust gate
    #[error("parse failure ratio {ratio:.3} exceeds the limit {max:.3}, refusing to render")]
    QualityGate { ratio: f64, max: f64 },

    // Rendering
    #[error(transparent)]
    Render(#[from] RenderError),
}
