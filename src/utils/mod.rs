pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ConverterError, ConverterResult, PathError, ValidationError};
pub use formats::{ImageFormat, format_from_extension};
pub use fs::{create_dir_all, extract_filename, file_exists, get_file_size};
