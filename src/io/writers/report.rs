use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::BatchReport;
use crate::error::Result;
use crate::types::Variant;

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    generated: DateTime<Utc>,
    variant: Variant,
    source_dir: &'a Path,
    output_dir: &'a Path,
    #[serde(flatten)]
    report: &'a BatchReport,
}

/// Write a timestamped JSON summary of a batch run
pub fn write_report(
    path: &Path,
    variant: Variant,
    source_dir: &Path,
    output_dir: &Path,
    report: &BatchReport,
) -> Result<()> {
    let run = RunReport {
        generated: Utc::now(),
        variant,
        source_dir,
        output_dir,
        report,
    };
    let json = serde_json::to_string_pretty(&run)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;
    Ok(())
}
