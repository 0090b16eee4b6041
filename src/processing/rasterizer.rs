//! The rasterization capability and backend selection.

use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::core::{BackendPreference, Dimensions};
use crate::utils::ConverterResult;

/// Whether a backend can render in the current environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Not usable; `guidance` tells the user how to fix that or convert by hand
    Unavailable { guidance: String },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Renders an SVG file into a PNG file of exactly the requested size.
///
/// Implementations are blocking and are driven from `spawn_blocking`.
pub trait Rasterizer: Send + Sync {
    /// Short backend name used in console messages and logs.
    fn name(&self) -> &str;

    /// Checked once per job, before any rendering is attempted.
    fn availability(&self) -> Availability;

    /// Renders `source` into `destination`, overwriting it if present.
    fn rasterize(&self, source: &Path, destination: &Path, size: Dimensions) -> ConverterResult<()>;
}

/// Stand-in used when no backend can be used.
#[derive(Debug, Clone)]
pub struct UnavailableRasterizer {
    name: String,
    guidance: String,
}

impl UnavailableRasterizer {
    pub fn new(name: impl Into<String>, guidance: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guidance: guidance.into(),
        }
    }

    /// Guidance for a backend that was left out of this build.
    #[allow(dead_code)]
    fn missing_feature(feature: &str) -> Self {
        Self::new(
            feature,
            format!(
                "{feature} support is not compiled in. Rebuild with: cargo install asset-converter --features {feature}"
            ),
        )
    }

    fn disabled() -> Self {
        Self::new("none", "Rasterization is disabled (RASTER_BACKEND=none)")
    }
}

impl Rasterizer for UnavailableRasterizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn availability(&self) -> Availability {
        Availability::Unavailable {
            guidance: self.guidance.clone(),
        }
    }

    fn rasterize(&self, _source: &Path, _destination: &Path, _size: Dimensions) -> ConverterResult<()> {
        Err(crate::utils::ConverterError::render(format!(
            "{} cannot rasterize: {}",
            self.name, self.guidance
        )))
    }
}

/// Picks the rasterizer for `preference` from the backends compiled into this build.
///
/// Never fails: a backend that cannot be provided turns into an
/// [`UnavailableRasterizer`] so each job reports guidance instead of aborting.
pub fn select_rasterizer(preference: BackendPreference) -> Arc<dyn Rasterizer> {
    let selected: Arc<dyn Rasterizer> = match preference {
        BackendPreference::Auto => auto_rasterizer(),
        BackendPreference::Resvg => resvg_rasterizer(),
        BackendPreference::Libvips => libvips_rasterizer(),
        BackendPreference::None => Arc::new(UnavailableRasterizer::disabled()),
    };
    debug!("Selected rasterizer '{}' for preference '{}'", selected.name(), preference);
    selected
}

fn auto_rasterizer() -> Arc<dyn Rasterizer> {
    if cfg!(feature = "resvg") {
        resvg_rasterizer()
    } else if cfg!(feature = "libvips") {
        libvips_rasterizer()
    } else {
        Arc::new(UnavailableRasterizer::new(
            "rasterizer",
            "No SVG rasterizer is compiled in. Rebuild with: cargo install asset-converter --features resvg",
        ))
    }
}

#[cfg(feature = "resvg")]
fn resvg_rasterizer() -> Arc<dyn Rasterizer> {
    Arc::new(super::resvg::ResvgRasterizer::new())
}

#[cfg(not(feature = "resvg"))]
fn resvg_rasterizer() -> Arc<dyn Rasterizer> {
    Arc::new(UnavailableRasterizer::missing_feature("resvg"))
}

#[cfg(feature = "libvips")]
fn libvips_rasterizer() -> Arc<dyn Rasterizer> {
    Arc::new(super::libvips::LibvipsRasterizer::new())
}

#[cfg(not(feature = "libvips"))]
fn libvips_rasterizer() -> Arc<dyn Rasterizer> {
    Arc::new(UnavailableRasterizer::missing_feature("libvips"))
}
