//! Optional JSON summary of a run.

use std::path::{Path, PathBuf};
use serde::Serialize;
use tracing::debug;

use crate::core::{ConversionResult, RunSummary};
use crate::utils::{ConverterError, ConverterResult};

use super::convert::Converter;

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub backend: &'a str,
    #[serde(rename = "assetsDir")]
    pub assets_dir: PathBuf,
    pub converted: usize,
    pub skipped: usize,
    pub results: &'a [ConversionResult],
}

impl<'a> RunReport<'a> {
    pub fn new(converter: &'a Converter, summary: &'a RunSummary) -> Self {
        Self {
            backend: converter.rasterizer_name(),
            assets_dir: converter.assets_dir().to_path_buf(),
            converted: summary.converted(),
            skipped: summary.skipped(),
            results: &summary.results,
        }
    }
}

/// Writes the run summary to `path` as pretty-printed JSON, replacing any previous report.
pub async fn write_report(
    path: &Path,
    converter: &Converter,
    summary: &RunSummary,
) -> ConverterResult<()> {
    let report = RunReport::new(converter, summary);
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| ConverterError::format(format!("Cannot serialize report: {e}")))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| ConverterError::io(format!("Cannot write report {}: {e}", path.display())))?;

    debug!("Report written to {}", path.display());
    Ok(())
}
