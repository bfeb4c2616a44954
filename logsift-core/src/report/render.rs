use crate::analyze::SummaryRow;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder the template must carry; replaced with the serialized rows.
const TABLE_PLACEHOLDER: &str = "$table_json";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read report template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report rows: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders `rows` into `dest` by substituting the `$table_json` placeholder
/// in the template with a JSON array that preserves row order.
///
/// The destination file is created or overwritten; nothing else changes on
/// disk.
pub fn render_report(rows: &[SummaryRow], template: &Path, dest: &Path) -> Result<(), RenderError> {
    let template_text = fs::read_to_string(template).map_err(|e| RenderError::ReadTemplate {
        path: template.to_path_buf(),
        source: e,
    })?;

    let table = serde_json::to_string(rows).map_err(|e| RenderError::Serialize { source: e })?;
    let rendered = template_text.replace(TABLE_PLACEHOLDER, &table);

    fs::write(dest, rendered).map_err(|e| RenderError::WriteReport {
        path: dest.to_path_buf(),
        source: e,
    })
}
