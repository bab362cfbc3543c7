//! qrgen core - QR code generation session
//!
//! This library turns text into a QR code image at a user-adjustable
//! pixel size, keeps the latest image in a transient working file,
//! derives a bounded preview for display and exports the working file
//! on request. Front-ends drive a [`QrSession`] through [`UiEvent`]s.

pub mod constants;
pub mod encoder;
pub mod events;
pub mod export;
pub mod lifecycle;
pub mod preview;
pub mod resize;
pub mod session;

mod error;

use std::path::PathBuf;

pub use error::{Error, Result};

/// Configuration for a QR session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Smallest QR image side in pixels; also the starting size
    pub min_size: u32,
    /// Largest QR image side in pixels; larger sizes are ignored
    pub max_size: u32,
    /// Size increment in pixels
    pub step: u32,
    /// Largest preview side in pixels
    pub preview_max: u32,
    /// Pixels per module rendered by the encoder before resizing
    pub module_scale: u32,
    /// Path of the transient working file
    pub working_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_size: constants::MIN_QR_SIZE,
            max_size: constants::MAX_QR_SIZE,
            step: constants::QR_SIZE_STEP,
            preview_max: constants::PREVIEW_MAX_SIZE,
            module_scale: constants::MODULE_SCALE,
            working_file: PathBuf::from(constants::WORKING_FILE_NAME),
        }
    }
}

impl Config {
    pub fn with_working_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_file = path.into();
        self
    }

    pub fn with_sizes(mut self, min_size: u32, step: u32) -> Self {
        self.min_size = min_size;
        self.step = step;
        self
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_preview_max(mut self, preview_max: u32) -> Self {
        self.preview_max = preview_max;
        self
    }

    /// Check that every size field is usable.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_size", self.min_size),
            ("step", self.step),
            ("preview_max", self.preview_max),
            ("module_scale", self.module_scale),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(Error::Config(format!("{} must be positive", name)));
            }
        }
        if self.max_size < self.min_size {
            return Err(Error::Config(format!(
                "max_size {} is below min_size {}",
                self.max_size, self.min_size
            )));
        }
        if self.module_scale > constants::MAX_MODULE_SCALE {
            return Err(Error::Config(format!(
                "module_scale must be at most {}",
                constants::MAX_MODULE_SCALE
            )));
        }
        if self.working_file.as_os_str().is_empty() {
            return Err(Error::Config("working_file must not be empty".to_string()));
        }
        Ok(())
    }
}

// Re-export key types for convenience
pub use encoder::{Encode, QrEncoder};
pub use events::{Dialog, DialogKind, Feedback, UiEvent};
pub use export::ExportOutcome;
pub use preview::PreviewProjector;
pub use resize::Resizer;
pub use session::{QrSession, SessionState, SizeChange};
