use std::path::Path;
use crate::core::ConversionJob;
use crate::utils::{
    ConverterResult, ImageFormat, ValidationError, format_from_extension,
};

/// Validates a conversion job before it reaches a rasterizer.
///
/// Source existence is not checked here; a missing source is a skip, not an error.
pub fn validate_job(job: &ConversionJob) -> ConverterResult<()> {
    validate_extension(&job.source_path, ImageFormat::SVG)?;
    validate_extension(&job.destination_path, ImageFormat::PNG)?;
    validate_dimensions(job.width, job.height)?;
    Ok(())
}

/// Validates that an existing source path points at a file
pub fn validate_source_file(path: &Path) -> ConverterResult<()> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path).into());
    }

    Ok(())
}

fn validate_extension(path: &Path, expected: ImageFormat) -> ConverterResult<()> {
    match format_from_extension(path) {
        Ok(format) if format == expected => Ok(()),
        _ => Err(ValidationError::wrong_extension(path, expected.primary_extension()).into()),
    }
}

fn validate_dimensions(width: u32, height: u32) -> ConverterResult<()> {
    if width == 0 {
        return Err(ValidationError::dimensions("Width cannot be 0").into());
    }

    if height == 0 {
        return Err(ValidationError::dimensions("Height cannot be 0").into());
    }

    Ok(())
}
