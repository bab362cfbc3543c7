//! Working file ownership
//!
//! The session keeps exactly one transient PNG on disk. It is replaced
//! atomically (temp sibling + rename) so readers never see a partial
//! file, and it is removed when the owner shuts down or is dropped.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::WORKING_FILE_NAME;
use crate::{Error, Result};

/// Handle to the reserved working file
#[derive(Debug)]
pub struct WorkingFile {
    path: PathBuf,
}

impl WorkingFile {
    /// Reserve `path` as the working file.
    ///
    /// A file with the reserved name is a leftover of an earlier run and is
    /// removed, so "file exists" keeps meaning "generated in this session".
    /// Any other existing file belongs to the user and is refused.
    pub fn reserve(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            if path.file_name() != Some(OsStr::new(WORKING_FILE_NAME)) {
                return Err(Error::Config(format!(
                    "working file {} already exists and would be overwritten",
                    path.display()
                )));
            }
            tracing::info!("removing leftover working file {}", path.display());
            remove_best_effort(&path);
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the working file contents with `bytes`.
    ///
    /// On failure the previous file (if any) is left as it was.
    pub fn replace(&self, bytes: &[u8]) -> Result<()> {
        let temp_path = self.temp_path();

        let written = write_synced(&temp_path, bytes)
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if let Err(source) = written {
            remove_best_effort(&temp_path);
            return Err(Error::WorkingFile {
                path: self.path.clone(),
                source,
            });
        }

        tracing::debug!("wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    /// Delete the working file. Failures are logged and ignored.
    pub fn cleanup(&self) {
        if self.path.exists() {
            remove_best_effort(&self.path);
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Drop for WorkingFile {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Remove `path`, logging instead of failing.
pub fn remove_best_effort(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!("removed {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not remove {}: {}", path.display(), e),
    }
}
