// src/processing/libvips/renderer.rs

//! Native rasterizer backed by libvips.
//!
//! libvips hands SVG decoding to librsvg, so this backend is only usable when
//! the system libvips was built with it. libvips is initialised once per
//! process and never shut down, since it cannot be started again afterwards.
//! If initialisation fails, the backend reports itself unavailable instead of
//! erroring.

use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

use libvips::ops::{self, ForeignKeep, Size, ThumbnailOptions};

use crate::core::Dimensions;
use crate::processing::rasterizer::{Availability, Rasterizer};
use crate::utils::{ConverterError, ConverterResult, extract_filename};

// 0-9, same zlib level libvips uses for its own default
const PNG_COMPRESSION: i32 = 6;

/// Thread-safe guard for the libvips `VipsApp` lifecycle.
///
/// `VipsApp` initializes the libvips thread pool and global state on creation
/// and shuts it down on drop. The only instance lives in [`VIPS`].
struct VipsAppGuard(libvips::VipsApp);

// libvips supports concurrent use; VipsImage values never cross threads here.
unsafe impl Send for VipsAppGuard {}
unsafe impl Sync for VipsAppGuard {}

/// Process-wide libvips runtime, or the reason it could not start.
static VIPS: OnceLock<Result<Arc<VipsAppGuard>, String>> = OnceLock::new();

fn vips_app() -> Result<Arc<VipsAppGuard>, String> {
    VIPS.get_or_init(|| match libvips::VipsApp::default("asset-converter") {
        Ok(app) => {
            // 0 = let libvips decide based on available CPU cores
            app.concurrency_set(0);
            debug!("libvips initialized (concurrency: {})", app.concurency_get());
            Ok(Arc::new(VipsAppGuard(app)))
        }
        Err(e) => {
            warn!("libvips failed to initialize: {e}");
            Err(e.to_string())
        }
    })
    .clone()
}

/// Renders SVG files through libvips' `thumbnail` operation.
pub struct LibvipsRasterizer {
    vips: Result<Arc<VipsAppGuard>, String>,
}

impl LibvipsRasterizer {
    pub fn new() -> Self {
        Self { vips: vips_app() }
    }
}

impl Default for LibvipsRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for LibvipsRasterizer {
    fn name(&self) -> &str {
        "libvips"
    }

    fn availability(&self) -> Availability {
        match &self.vips {
            Ok(_) => Availability::Available,
            Err(reason) => Availability::Unavailable {
                guidance: format!(
                    "libvips could not start ({reason}). Install libvips with SVG support, e.g. apt install libvips-dev librsvg2-dev"
                ),
            },
        }
    }

    fn rasterize(&self, source: &Path, destination: &Path, size: Dimensions) -> ConverterResult<()> {
        if self.vips.is_err() {
            return Err(ConverterError::render("libvips is not initialized"));
        }

        let source_str = source
            .to_str()
            .ok_or_else(|| ConverterError::render(format!("Non UTF-8 path: {}", source.display())))?;
        let destination_str = destination
            .to_str()
            .ok_or_else(|| ConverterError::render(format!("Non UTF-8 path: {}", destination.display())))?;

        // Size::Force ignores the aspect ratio so the output is exactly width × height
        let opts = ThumbnailOptions {
            height: size.height as i32,
            size: Size::Force,
            ..ThumbnailOptions::default()
        };

        let image = ops::thumbnail_with_opts(source_str, size.width as i32, &opts)
            .map_err(|e| ConverterError::render(format!("Failed to load '{source_str}': {e}")))?;

        debug!(
            "Loaded '{}' at {}×{}",
            extract_filename(source),
            image.get_width(),
            image.get_height()
        );

        let save_opts = ops::PngsaveOptions {
            compression: PNG_COMPRESSION,
            keep: ForeignKeep::None,
            ..ops::PngsaveOptions::default()
        };

        ops::pngsave_with_opts(&image, destination_str, &save_opts)
            .map_err(|e| ConverterError::render(format!("PNG save failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HERO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="80" height="80" viewBox="0 0 80 80"><rect width="80" height="80" fill="#ff6f00"/></svg>"##;

    fn png_dimensions(path: &Path) -> (u32, u32) {
        let bytes = std::fs::read(path).unwrap();
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn test_instances_share_one_runtime() {
        let first = LibvipsRasterizer::new();
        let second = LibvipsRasterizer::new();

        if let (Ok(a), Ok(b)) = (&first.vips, &second.vips) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_renders_forced_size_across_instances() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("delivery_hero.svg");
        let destination = temp_dir.path().join("delivery_hero.png");
        std::fs::write(&source, HERO).unwrap();
        let size = Dimensions { width: 400, height: 300 };

        // A dropped rasterizer must not take the runtime down with it
        for _ in 0..2 {
            let rasterizer = LibvipsRasterizer::new();
            if !rasterizer.availability().is_available() {
                return;
            }
            rasterizer.rasterize(&source, &destination, size).unwrap();
            assert_eq!(png_dimensions(&destination), (400, 300));
        }
    }
}
