use std::path::PathBuf;

use thiserror::Error;

/// qrgen error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Enter text to generate a QR code")]
    EmptyInput,

    #[error("QR encoding failed: {0}")]
    Encoding(String),

    #[error("Resize failed: {0}")]
    Resize(String),

    #[error("Nothing to save: generate a QR code first")]
    NoArtifact,

    #[error("Failed to save QR code to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write working file {}: {source}", .path.display())]
    WorkingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether the front-end should show this error as a modal dialog.
    ///
    /// Input-state errors (no text, nothing generated yet) only update the
    /// status line and leave the UI usable.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, Error::EmptyInput | Error::NoArtifact)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_errors_are_not_blocking() {
        assert!(!Error::EmptyInput.is_blocking());
        assert!(!Error::NoArtifact.is_blocking());
    }

    #[test]
    fn test_dependency_errors_are_blocking() {
        assert!(Error::Encoding("data too long".to_string()).is_blocking());
        assert!(Error::Resize("zero side".to_string()).is_blocking());

        let save = Error::Save {
            path: PathBuf::from("/readonly/qrcode.png"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(save.is_blocking());
        assert!(save.to_string().contains("/readonly/qrcode.png"));
    }
}
