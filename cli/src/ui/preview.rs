//! Terminal rendering of the preview image.

use image::imageops::{self, FilterType};
use image::GrayImage;

/// Width of the terminal rendering in character cells
const PREVIEW_COLUMNS: u32 = 64;

/// Pixels darker than this count as dark modules
const DARK_THRESHOLD: u8 = 128;

/// Print the preview to the terminal.
pub fn print_preview(preview: &GrayImage) {
    print!("{}", render_preview(preview, PREVIEW_COLUMNS));
}

/// Render `preview` with Unicode half blocks, `columns` cells wide.
///
/// Each character covers 2 vertical pixels of the downsampled image:
/// ▀ = top dark, ▄ = bottom dark, █ = both dark, space = both light.
pub fn render_preview(preview: &GrayImage, columns: u32) -> String {
    let side = columns.min(preview.width()).max(1);
    let small = imageops::resize(preview, side, side, FilterType::Triangle);
    let is_dark = |x: u32, y: u32| y < side && small.get_pixel(x, y)[0] < DARK_THRESHOLD;

    let mut out = String::new();
    for y in (0..side).step_by(2) {
        out.push_str("  ");
        for x in 0..side {
            let ch = match (is_dark(x, y), is_dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_render_dimensions() {
        let preview = GrayImage::from_pixel(200, 200, Luma([255]));
        let rendered = render_preview(&preview, 64);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 32);
        assert!(lines.iter().all(|l| l.chars().count() == 66));
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_render_half_blocks() {
        // Top half dark, bottom half light
        let preview = GrayImage::from_fn(4, 4, |_, y| if y < 2 { Luma([0]) } else { Luma([255]) });
        let rendered = render_preview(&preview, 4);
        assert_eq!(rendered, "  ████\n      \n");

        let stripes = GrayImage::from_fn(2, 2, |_, y| if y == 0 { Luma([0]) } else { Luma([255]) });
        assert_eq!(render_preview(&stripes, 2), "  ▀▀\n");
    }

    #[test]
    fn test_small_preview_is_not_upscaled() {
        let preview = GrayImage::from_pixel(10, 10, Luma([0]));
        let rendered = render_preview(&preview, 64);
        assert_eq!(rendered.lines().count(), 5);
    }
}
