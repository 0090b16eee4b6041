use std::path::Path;
use tokio::fs;
use crate::utils::{ConverterError, ConverterResult};

/// Get file size in bytes
pub async fn get_file_size(path: impl AsRef<Path>) -> ConverterResult<u64> {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.len())
        .map_err(|e| ConverterError::io(format!("Failed to get file size: {}", e)))
}

/// Check if a regular file exists at `path`
pub async fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub async fn create_dir_all(dir: impl AsRef<Path>) -> ConverterResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .await
        .map_err(|e| ConverterError::io(format!(
            "Cannot create directory {}: {}", dir.display(), e
        )))
}

/// Get the final path component for display, falling back to the whole path
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
