//! Runtime configuration read from the environment.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use crate::utils::ConverterError;

/// Default directory holding the SVG sources and PNG outputs.
pub const DEFAULT_ASSETS_DIR: &str = "assets/images";

/// Which rasterizer the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendPreference {
    /// First backend compiled into this binary
    #[default]
    Auto,
    Resvg,
    Libvips,
    /// Never rasterize; every job reports the manual-conversion guidance
    None,
}

impl FromStr for BackendPreference {
    type Err = ConverterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "resvg" => Ok(Self::Resvg),
            "libvips" | "vips" => Ok(Self::Libvips),
            "none" | "off" => Ok(Self::None),
            other => Err(ConverterError::config(format!(
                "Unknown RASTER_BACKEND '{other}'. Expected auto, resvg, libvips or none"
            ))),
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Resvg => "resvg",
            Self::Libvips => "libvips",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// Configuration for a conversion run.
#[derive(Clone, Debug)]
pub struct ConverterConfig {
    /// Directory holding sources and outputs
    pub assets_dir: PathBuf,
    /// Requested rasterizer
    pub backend: BackendPreference,
    /// Where to write the JSON run summary, if anywhere
    pub report_path: Option<PathBuf>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            backend: BackendPreference::Auto,
            report_path: None,
        }
    }
}

impl ConverterConfig {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConverterError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConverterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let assets_dir = lookup("ASSETS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let backend = match lookup("RASTER_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        let report_path = lookup("CONVERSION_REPORT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            assets_dir,
            backend,
            report_path,
        })
    }
}
