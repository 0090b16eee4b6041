//! Entry points driven by the binary.
//!
//! - [`Converter`]: `ensure_output_directory`, `convert`, `run`
//! - [`run`]: one full run from a [`ConverterConfig`](crate::core::ConverterConfig)
//! - [`write_report`]: optional JSON summary

mod convert;
mod report;

pub use convert::{Converter, run};
pub use report::{RunReport, write_report};
