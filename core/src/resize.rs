//! Square image resampling

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::constants::MAX_RESIZE_SIDE;
use crate::{Error, Result};

/// Resamples images to an exact square side.
#[derive(Debug, Clone, Copy)]
pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Return a new `side`×`side` image; `image` is left untouched.
    ///
    /// `side` must be in `1..=MAX_RESIZE_SIDE`.
    pub fn resize(&self, image: &GrayImage, side: u32) -> Result<GrayImage> {
        if side == 0 {
            return Err(Error::Resize("target side must be positive".to_string()));
        }
        if side > MAX_RESIZE_SIDE {
            return Err(Error::Resize(format!(
                "target side {}px exceeds the {}px limit",
                side, MAX_RESIZE_SIDE
            )));
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::Resize("source image is empty".to_string()));
        }

        if image.width() == side && image.height() == side {
            return Ok(image.clone());
        }

        Ok(imageops::resize(image, side, side, self.filter))
    }
}

impl Default for Resizer {
    /// Lanczos3 handles both down- and upscaling of QR modules well.
    fn default() -> Self {
        Self::new(FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn checkerboard(side: u32) -> GrayImage {
        GrayImage::from_fn(side, side, |x, y| {
            if (x / 10 + y / 10) % 2 == 0 { Luma([0]) } else { Luma([255]) }
        })
    }

    #[test]
    fn test_resize_down_and_up() {
        let resizer = Resizer::default();
        let source = checkerboard(290);

        let smaller = resizer.resize(&source, 200).unwrap();
        assert_eq!(smaller.dimensions(), (200, 200));

        let larger = resizer.resize(&source, 500).unwrap();
        assert_eq!(larger.dimensions(), (500, 500));

        // Source untouched
        assert_eq!(source.dimensions(), (290, 290));
    }

    #[test]
    fn test_resize_same_side_copies() {
        let source = checkerboard(120);
        let copy = Resizer::default().resize(&source, 120).unwrap();
        assert_eq!(copy.as_raw(), source.as_raw());
    }

    #[test]
    fn test_resize_rejects_zero_side() {
        let result = Resizer::default().resize(&checkerboard(40), 0);
        assert!(matches!(result, Err(Error::Resize(_))));
    }

    #[test]
    fn test_resize_rejects_huge_side() {
        let result = Resizer::default().resize(&checkerboard(40), 4_000_000_200);
        assert!(matches!(result, Err(Error::Resize(_))));

        let result = Resizer::default().resize(&checkerboard(40), MAX_RESIZE_SIDE + 1);
        assert!(matches!(result, Err(Error::Resize(_))));
    }

    #[test]
    fn test_resize_rejects_empty_source() {
        let result = Resizer::default().resize(&GrayImage::new(0, 0), 50);
        assert!(matches!(result, Err(Error::Resize(_))));
    }
}
