//! Core types and configuration.
//!
//! This module contains the fundamental types used throughout the converter:
//! - [`ConversionJob`]: One SVG → PNG conversion at fixed dimensions
//! - [`ConversionResult`] / [`RunSummary`]: What a run produced
//! - [`ConverterConfig`]: Settings read from the environment

mod config;
mod task;
mod types;

pub use config::{BackendPreference, ConverterConfig, DEFAULT_ASSETS_DIR};
pub use task::{ConversionJob, default_jobs, HERO_SIZE, HERO_STEM, LOGO_SIZE, LOGO_STEM};
pub use types::{ConversionOutcome, ConversionResult, Dimensions, RunSummary, SkipReason};
