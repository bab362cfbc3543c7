//! QR symbol encoding

use image::{GrayImage, Luma};
use qrcode::QrCode;

use crate::constants::MODULE_SCALE;
use crate::{Error, Result};

/// Turns text into a QR code raster image.
///
/// The session only depends on this trait so tests can swap in encoders
/// that fail or count calls.
pub trait Encode {
    /// Encode non-empty `text` into a grayscale image at the encoder's
    /// native scale.
    fn encode(&self, text: &str) -> Result<GrayImage>;
}

/// Encoder backed by the `qrcode` crate
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    /// Pixels per module along each axis
    scale: u32,
}

impl QrEncoder {
    pub fn new(scale: u32) -> Self {
        Self { scale: scale.max(1) }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(MODULE_SCALE)
    }
}

impl Encode for QrEncoder {
    fn encode(&self, text: &str) -> Result<GrayImage> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let code = QrCode::new(text.as_bytes())
            .map_err(|e| Error::Encoding(e.to_string()))?;

        // Quiet zone stays on: scanners need the light border.
        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(self.scale, self.scale)
            .build();

        tracing::debug!(
            "encoded {} bytes into {} modules ({}x{} px)",
            text.len(),
            code.width(),
            image.width(),
            image.height()
        );
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_square_multiple_of_scale() {
        let encoder = QrEncoder::new(10);
        let image = encoder.encode("https://example.com").unwrap();

        assert_eq!(image.width(), image.height());
        assert_eq!(image.width() % 10, 0);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let encoder = QrEncoder::default();
        let a = encoder.encode("hello").unwrap();
        let b = encoder.encode("hello").unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_encode_rejects_empty_text() {
        let result = QrEncoder::default().encode("");
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_encode_rejects_oversized_text() {
        // Beyond the byte capacity of the largest symbol version
        let text = "x".repeat(8000);
        let result = QrEncoder::default().encode(&text);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let encoder = QrEncoder::new(0);
        assert_eq!(encoder.scale(), 1);
        assert!(encoder.encode("a").is_ok());
    }
}
