//! SVG rasterization backends and job validation.
//!
//! - [`Rasterizer`]: the capability every backend implements
//! - [`select_rasterizer`]: maps a [`BackendPreference`](crate::core::BackendPreference) to a backend
//! - `resvg`: pure-Rust backend (default feature)
//! - `libvips`: native backend (feature `libvips`)

mod rasterizer;
mod validation;

#[cfg(feature = "resvg")]
mod resvg;
#[cfg(feature = "libvips")]
mod libvips;

pub use rasterizer::{Availability, Rasterizer, UnavailableRasterizer, select_rasterizer};
pub use validation::{validate_job, validate_source_file};

#[cfg(feature = "resvg")]
pub use self::resvg::ResvgRasterizer;
#[cfg(feature = "libvips")]
pub use self::libvips::LibvipsRasterizer;
