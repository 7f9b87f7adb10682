//! Rendering errors.

use thiserror::Error;
use tilecast_dda::TraversalError;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A column ray never reached a wall.
    #[error("Ray traversal failed: {0}")]
    Traversal(#[from] TraversalError),

    /// Map or configuration problem.
    #[error(transparent)]
    Core(#[from] tilecast_core::Error),

    /// Failed to encode or write an image.
    #[error("Failed to save image: {0}")]
    Image(#[from] image::ImageError),

    /// Pixel data was the wrong size for the given dimensions.
    #[error("image data does not match its dimensions")]
    InvalidImageData,
}
