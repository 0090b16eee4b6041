// src/processing/resvg/mod.rs

//! SVG rasterization via resvg, with no native dependencies.

mod renderer;

pub use renderer::ResvgRasterizer;
