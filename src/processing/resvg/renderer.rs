// src/processing/resvg/renderer.rs

//! Pure-Rust rasterizer: parse with usvg, paint with tiny-skia, encode PNG.

use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::debug;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use crate::core::Dimensions;
use crate::processing::rasterizer::{Availability, Rasterizer};
use crate::utils::{ConverterError, ConverterResult, extract_filename};

/// Renders SVG files with resvg. Always available when compiled in.
pub struct ResvgRasterizer {
    /// System fonts, loaded on the first render and shared by every later parse
    fontdb: OnceLock<Arc<fontdb::Database>>,
}

impl ResvgRasterizer {
    pub fn new() -> Self {
        Self {
            fontdb: OnceLock::new(),
        }
    }

    fn fontdb(&self) -> Arc<fontdb::Database> {
        self.fontdb
            .get_or_init(|| {
                let mut db = fontdb::Database::new();
                db.load_system_fonts();
                debug!("resvg font database loaded ({} faces)", db.len());
                Arc::new(db)
            })
            .clone()
    }

    fn options_for(&self, source: &Path) -> usvg::Options<'static> {
        let mut opt = usvg::Options::default();
        // Relative <image href> paths resolve against the SVG's own directory
        opt.resources_dir = std::fs::canonicalize(source)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        opt.fontdb = self.fontdb();
        opt
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ResvgRasterizer {
    fn name(&self) -> &str {
        "resvg"
    }

    fn availability(&self) -> Availability {
        Availability::Available
    }

    fn rasterize(&self, source: &Path, destination: &Path, size: Dimensions) -> ConverterResult<()> {
        let svg_data = std::fs::read(source).map_err(|e| {
            ConverterError::io(format!("Cannot read '{}': {e}", source.display()))
        })?;

        let tree = usvg::Tree::from_data(&svg_data, &self.options_for(source)).map_err(|e| {
            ConverterError::render(format!("Failed to parse '{}': {e}", source.display()))
        })?;

        let mut pixmap = Pixmap::new(size.width, size.height).ok_or_else(|| {
            ConverterError::render(format!("Cannot allocate a {size} pixmap"))
        })?;

        // Stretch the intrinsic size onto the target on each axis independently
        let svg_size = tree.size();
        let transform = Transform::from_scale(
            size.width as f32 / svg_size.width(),
            size.height as f32 / svg_size.height(),
        );

        debug!(
            "Rendering '{}' ({}×{}) at {}",
            extract_filename(source),
            svg_size.width(),
            svg_size.height(),
            size
        );

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .save_png(destination)
            .map_err(|e| ConverterError::render(format!(
                "PNG save failed for '{}': {e}", destination.display()
            )))
    }
}
