//! Core types for conversion results.

use std::fmt;
use std::path::PathBuf;
use serde::Serialize;

/// Target raster size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// Why a job produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The source SVG was not on disk
    SourceMissing,
    /// No rasterizer could be used in this environment
    RasterizerUnavailable,
}

/// What happened to one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "reason")]
pub enum ConversionOutcome {
    Converted,
    Skipped(SkipReason),
}

/// Result of a single conversion job.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Source file name, e.g. `logo.svg`
    pub name: String,
    /// Path to the source SVG
    #[serde(rename = "sourcePath")]
    pub source_path: PathBuf,
    /// Path to the PNG output
    #[serde(rename = "destinationPath")]
    pub destination_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub outcome: ConversionOutcome,
    /// Size of the written PNG in bytes, when one was written
    #[serde(rename = "outputSize")]
    pub output_size: Option<u64>,
}

/// Per-job results of one run, in job order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub results: Vec<ConversionResult>,
}

impl RunSummary {
    pub fn converted(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == ConversionOutcome::Converted)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.results.len() - self.converted()
    }
}
