// src/processing/libvips/mod.rs

//! SVG rasterization via libvips-rs (cargo feature `libvips`).
//!
//! Linking is configured in `build.rs`; set `VIPS_DIR` to point at a
//! non-system libvips install.

mod renderer;

pub use renderer::LibvipsRasterizer;
