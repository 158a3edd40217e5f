//! Frame lookup on an existing filmstrip.
//!
//! Mirrors how a UI control reads the strip back: frames are square, stacked
//! vertically, so the frame count follows from the image dimensions and a
//! normalized control position selects one row.

use image::{RgbaImage, imageops};

use crate::error::{FilmstripError, Result};

/// Location of one frame inside a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Number of square frames in a strip of the given dimensions.
///
/// # Example
/// ```
/// use knob_filmstrip::layout::frame_count_for;
///
/// assert_eq!(frame_count_for(100, 6400).unwrap(), 64);
/// assert!(frame_count_for(100, 6450).is_err());
/// ```
pub fn frame_count_for(width: u32, height: u32) -> Result<u32> {
    if width == 0 || height < width || height % width != 0 {
        return Err(FilmstripError::InvalidDimensions { width, height });
    }
    Ok(height / width)
}

/// Map a control position (0.0 to 1.0) to a frame index.
///
/// Positions outside the range are clamped; 1.0 selects the last frame.
pub fn frame_index_for_position(position: f32, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    let position = position.clamp(0.0, 1.0);
    ((position * count as f32) as u32).min(count - 1)
}

/// Rectangle of frame `index` in a strip of `frame_size` wide frames.
pub fn frame_rect(index: u32, frame_size: u32) -> FrameRect {
    FrameRect {
        x: 0,
        y: index * frame_size,
        width: frame_size,
        height: frame_size,
    }
}

/// Copy frame `index` out of `strip`.
pub fn extract_frame(strip: &RgbaImage, index: u32) -> Result<RgbaImage> {
    let count = frame_count_for(strip.width(), strip.height())?;
    if index >= count {
        return Err(FilmstripError::FrameOutOfRange { index, count });
    }

    let rect = frame_rect(index, strip.width());
    Ok(imageops::crop_imm(strip, rect.x, rect.y, rect.width, rect.height).to_image())
}
