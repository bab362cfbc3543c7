//! Export of the working artifact to a user-chosen path

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::DEFAULT_EXPORT_EXTENSION;
use crate::{Error, Result};

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// The user dismissed the save dialog; nothing happened.
    Cancelled,
    /// The artifact was copied to `path`.
    Saved { path: PathBuf, bytes: u64 },
}

/// Copy the working file at `working` to `destination`.
///
/// Fails with [`Error::NoArtifact`] before anything was generated;
/// otherwise `None` means the save dialog was cancelled. The working file
/// is only read.
pub fn export(working: &Path, destination: Option<&Path>) -> Result<ExportOutcome> {
    if !working.is_file() {
        return Err(Error::NoArtifact);
    }

    let Some(destination) = destination else {
        tracing::debug!("export cancelled");
        return Ok(ExportOutcome::Cancelled);
    };

    let path = with_default_extension(destination);
    let bytes = fs::copy(working, &path).map_err(|source| Error::Save {
        path: path.clone(),
        source,
    })?;

    tracing::info!("saved QR code to {} ({} bytes)", path.display(), bytes);
    Ok(ExportOutcome::Saved { path, bytes })
}

/// Append `.png` when the chosen name has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXPORT_EXTENSION)
    }
}
