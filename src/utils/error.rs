//! Error types for the asset converter.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for conversion jobs.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid job dimensions
    #[error("Dimensions error: {0}")]
    Dimensions(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// Extension does not match the format the job expects
    #[error("Expected a .{expected} file: {path}")]
    WrongExtension { path: PathBuf, expected: String },
}

/// Main error type for the converter.
///
/// Everything the library can fail with ends up here; `main` wraps it in
/// `anyhow` for the final report.
#[derive(Error, Debug, Serialize)]
pub enum ConverterError {
    /// Job validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The rasterizer rejected the input or failed to write the output
    #[error("Render error: {0}")]
    Render(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Unsupported or unknown image format
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for converter operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

impl ConverterError {
    pub fn render<T: Into<String>>(msg: T) -> Self {
        Self::Render(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn wrong_extension(path: impl Into<PathBuf>, expected: impl Into<String>) -> Self {
        Self::Path(PathError::WrongExtension {
            path: path.into(),
            expected: expected.into(),
        })
    }

    pub fn dimensions(msg: impl Into<String>) -> Self {
        Self::Dimensions(msg.into())
    }
}

// Convert std::io::Error to ConverterError
impl From<io::Error> for ConverterError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to ConverterError
impl From<PathError> for ConverterError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_lifts_into_validation() {
        let err: ConverterError = PathError::NotFound(PathBuf::from("logo.svg")).into();
        assert!(matches!(
            err,
            ConverterError::Validation(ValidationError::Path(PathError::NotFound(_)))
        ));
        assert_eq!(err.to_string(), "Validation error: Path error: File not found: logo.svg");
    }

    #[test]
    fn test_io_error_message_is_kept() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ConverterError::from(io_err);
        assert_eq!(err.to_string(), "IO error: denied");
    }

    #[test]
    fn test_wrong_extension_message() {
        let err = ValidationError::wrong_extension("hero.jpg", "svg");
        assert_eq!(err.to_string(), "Path error: Expected a .svg file: hero.jpg");
    }
}
