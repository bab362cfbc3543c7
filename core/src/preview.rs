//! Display-only preview scaling

use image::GrayImage;

use crate::resize::Resizer;
use crate::Result;

/// Produces bounded preview copies of the working artifact.
#[derive(Debug, Clone, Copy)]
pub struct PreviewProjector {
    max_side: u32,
    resizer: Resizer,
}

impl PreviewProjector {
    pub fn new(max_side: u32, resizer: Resizer) -> Self {
        Self { max_side, resizer }
    }

    /// Side of the preview for an artifact of `size` pixels.
    pub fn preview_side(&self, size: u32) -> u32 {
        size.min(self.max_side)
    }

    /// Scale `artifact` for display. The artifact itself is never modified.
    pub fn project(&self, artifact: &GrayImage, size: u32) -> Result<GrayImage> {
        self.resizer.resize(artifact, self.preview_side(size))
    }
}
