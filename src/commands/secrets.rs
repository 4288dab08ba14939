//! Placeholder secret files for local development.
use crate::error::SetupError;
use log::info;
use std::fs;
use std::path::Path;

/// Written to every secret path. Deployments mount real secrets over these.
pub const PLACEHOLDER: &str = "dummy-secret-data";

/// Ensures `path` is a regular file containing the placeholder value.
/// Whatever occupies the path is removed first; the directory removal does
/// not recurse, so a non-empty directory fails the run.
pub fn write_placeholder(path: &Path) -> Result<(), SetupError> {
    if path.is_dir() {
        fs::remove_dir(path)?;
    }

    if path.is_file() {
        fs::remove_file(path)?;
    }

    info!("Create dummy secret file {}", path.display());

    fs::write(path, PLACEHOLDER)?;

    Ok(())
}
