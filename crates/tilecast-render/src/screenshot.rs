//! Screenshot saving.

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgba};
use tracing::info;

use crate::error::RenderError;

/// Expand an output pattern, replacing `{}` with the frame number.
pub fn output_path(pattern: &str, frame: u64) -> PathBuf {
    PathBuf::from(pattern.replace("{}", &frame.to_string()))
}

/// Save RGBA pixel data to an image file.
///
/// # Arguments
/// * `data` - Raw RGBA pixel data (4 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `path` - Output file path (format determined by extension)
pub fn save_screenshot(
    data: Vec<u8>,
    width: u32,
    height: u32,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let path = path.as_ref();

    let image = ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, data)
        .ok_or(RenderError::InvalidImageData)?;

    image.save(path)?;

    info!("Screenshot saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_expands_frame_number() {
        assert_eq!(output_path("frame_{}.png", 42), PathBuf::from("frame_42.png"));
        assert_eq!(output_path("view.png", 7), PathBuf::from("view.png"));
    }

    #[test]
    fn short_buffer_is_rejected() {
        let err = save_screenshot(vec![0; 7], 2, 1, "unused.png").unwrap_err();
        assert!(matches!(err, RenderError::InvalidImageData));
    }

    #[test]
    fn png_is_written() {
        let path = std::env::temp_dir().join("tilecast_screenshot_test.png");
        save_screenshot(vec![255; 2 * 2 * 4], 2, 2, &path).unwrap();
        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));
        let _ = std::fs::remove_file(path);
    }
}
