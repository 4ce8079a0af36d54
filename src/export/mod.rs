//! Report generation.
//!
//! This module renders a completed [`ScanResult`] into a document and writes it
//! next to the other reports of the output directory. Two formats are
//! supported: Markdown for reading and JSON for tooling.

mod json;
mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::{ReportFormat, REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::error_handling::{QueryStatsSnapshot, ReportError};
use crate::models::ScanResult;

pub use json::render_json;
pub use markdown::render_markdown;

/// Run information printed alongside the scan result.
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Local>,
    /// Wall-clock duration of the scan
    pub elapsed_seconds: f64,
    /// Query counters at the end of the scan
    pub stats: QueryStatsSnapshot,
}

impl ReportMetadata {
    /// Metadata stamped with the current time.
    pub fn new(elapsed_seconds: f64, stats: QueryStatsSnapshot) -> Self {
        Self {
            generated_at: Local::now(),
            elapsed_seconds,
            stats,
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9.-]` with `_`.
pub fn sanitize_target(target: &str) -> String {
    target
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File name of a report: `dns_report_<target>_<YYYYMMDD_HHMMSS>.<ext>`.
pub fn report_file_name(
    target: &str,
    generated_at: &DateTime<Local>,
    format: ReportFormat,
) -> String {
    format!(
        "{}_{}_{}.{}",
        REPORT_FILE_PREFIX,
        sanitize_target(target),
        generated_at.format(REPORT_TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// Renders the report document in `format`.
pub fn render_report(
    result: &ScanResult,
    metadata: &ReportMetadata,
    format: ReportFormat,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(result, metadata)?),
        ReportFormat::Json => render_json(result, metadata),
    }
}

/// Renders and writes the report into `output_dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn write_report(
    result: &ScanResult,
    metadata: &ReportMetadata,
    output_dir: &Path,
    format: ReportFormat,
) -> Result<PathBuf, ReportError> {
    let document = render_report(result, metadata, format)?;
    fs::create_dir_all(output_dir)?;
    let file_name = report_file_name(result.target(), &metadata.generated_at, format);
    let path = output_dir.join(file_name);
    fs::write(&path, document)?;
    log::info!("Report written to {}", path.display());
    Ok(path)
}
