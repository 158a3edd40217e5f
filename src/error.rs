//! Custom error types for filmstrip generation.
//!
//! Rendering itself cannot fail; errors come from encoding or writing the
//! strip and from slicing a strip whose layout does not add up.

use thiserror::Error;

/// Main error type for filmstrip operations.
#[derive(Error, Debug)]
pub enum FilmstripError {
    /// Encoding or saving the image failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error while writing the strip.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Strip height is not a whole number of square frames.
    #[error("Invalid filmstrip dimensions {width}x{height}: height must be a non-zero multiple of width")]
    InvalidDimensions { width: u32, height: u32 },

    /// Requested frame lies past the end of the strip.
    #[error("Frame {index} out of range (strip has {count} frames)")]
    FrameOutOfRange { index: u32, count: u32 },
}

/// Result type alias for filmstrip operations.
pub type Result<T> = std::result::Result<T, FilmstripError>;
