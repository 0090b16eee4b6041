// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for external consumers
pub use self::core::{ConversionJob, ConversionOutcome, ConversionResult, ConverterConfig, RunSummary};
pub use self::utils::{ConverterError, ConverterResult};
pub use self::processing::{Availability, Rasterizer, select_rasterizer};
pub use self::commands::{Converter, run};

// The binary in main.rs is a thin wrapper around `run`.
