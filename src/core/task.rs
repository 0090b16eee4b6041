//! Conversion job definition and the fixed job table.

use std::path::{Path, PathBuf};
use crate::core::Dimensions;

/// Logo: `logo.svg` → `logo.png` at 200×200.
pub const LOGO_STEM: &str = "logo";
pub const LOGO_SIZE: Dimensions = Dimensions { width: 200, height: 200 };

/// Hero image: `delivery_hero.svg` → `delivery_hero.png` at 400×300.
pub const HERO_STEM: &str = "delivery_hero";
pub const HERO_SIZE: Dimensions = Dimensions { width: 400, height: 300 };

/// Represents a single SVG → PNG conversion.
///
/// Jobs are built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// Path to the source SVG file
    pub source_path: PathBuf,
    /// Path where the PNG will be written
    pub destination_path: PathBuf,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
}

impl ConversionJob {
    /// Creates the job for `<dir>/<stem>.svg` → `<dir>/<stem>.png`.
    pub fn for_asset(dir: impl AsRef<Path>, stem: &str, size: Dimensions) -> Self {
        let dir = dir.as_ref();
        Self {
            source_path: dir.join(format!("{stem}.svg")),
            destination_path: dir.join(format!("{stem}.png")),
            width: size.width,
            height: size.height,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// File name of the source, used in console messages.
    pub fn source_name(&self) -> String {
        crate::utils::extract_filename(&self.source_path)
    }
}

/// The two assets the delivery app ships, rooted at `dir`.
pub fn default_jobs(dir: impl AsRef<Path>) -> Vec<ConversionJob> {
    let dir = dir.as_ref();
    vec![
        ConversionJob::for_asset(dir, LOGO_STEM, LOGO_SIZE),
        ConversionJob::for_asset(dir, HERO_STEM, HERO_SIZE),
    ]
}
