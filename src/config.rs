//! Generator constants.
//!
//! Everything the generator needs is fixed here; `FilmstripConfig::default()`
//! bundles these values for the renderer and assembler.

use image::Rgba;

// =============================================================================
// Strip Layout
// =============================================================================

/// Width and height of one frame in pixels.
pub const FRAME_SIZE: u32 = 100;

/// Number of frames stacked in the strip.
pub const FRAME_COUNT: u32 = 64;

/// Indicator angle of the first frame (degrees, 0 = up, clockwise).
pub const START_ANGLE_DEG: f32 = -135.0;

/// Indicator angle of the last frame.
pub const END_ANGLE_DEG: f32 = 135.0;

/// Output file name, written to the working directory.
pub const OUTPUT_FILE: &str = "example_knob_filmstrip.png";

// =============================================================================
// Knob Colors
// =============================================================================

pub mod colors {
    use image::Rgba;

    pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
    pub const BODY: Rgba<u8> = Rgba([50, 180, 255, 255]); // Cyan blue
    pub const OUTLINE: Rgba<u8> = Rgba([30, 130, 200, 255]); // Darker blue
    pub const INDICATOR: Rgba<u8> = Rgba([255, 255, 255, 255]); // White
    pub const HUB: Rgba<u8> = Rgba([30, 130, 200, 255]);
}

// =============================================================================
// Knob Style
// =============================================================================

/// Geometry and colors of the knob glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobStyle {
    /// Radius of the knob body, outline included
    pub body_radius: i32,
    pub body_color: Rgba<u8>,
    pub outline_color: Rgba<u8>,
    /// Outline thickness, drawn inside the body radius
    pub outline_width: i32,
    /// Gap between the indicator tip and the body edge
    pub indicator_inset: i32,
    pub indicator_width: f32,
    pub indicator_color: Rgba<u8>,
    /// Radius of the dot at the indicator tip
    pub tip_dot_radius: i32,
    pub hub_radius: i32,
    pub hub_color: Rgba<u8>,
}

impl KnobStyle {
    /// Distance from the center to the indicator tip.
    pub fn indicator_length(&self) -> f32 {
        (self.body_radius - self.indicator_inset) as f32
    }
}

impl Default for KnobStyle {
    fn default() -> Self {
        Self {
            body_radius: 40,
            body_color: colors::BODY,
            outline_color: colors::OUTLINE,
            outline_width: 3,
            indicator_inset: 5,
            indicator_width: 4.0,
            indicator_color: colors::INDICATOR,
            tip_dot_radius: 3,
            hub_radius: 8,
            hub_color: colors::HUB,
        }
    }
}

// =============================================================================
// Filmstrip Config
// =============================================================================

/// Full description of the strip to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmstripConfig {
    pub frame_size: u32,
    pub frame_count: u32,
    pub start_angle_deg: f32,
    pub end_angle_deg: f32,
    pub style: KnobStyle,
}

impl FilmstripConfig {
    /// Height of the assembled strip.
    pub fn strip_height(&self) -> u32 {
        self.frame_size * self.frame_count
    }

    /// Center of a frame. Integer division, so even sizes land on the
    /// lower-right of the four middle pixels.
    pub fn frame_center(&self) -> (i32, i32) {
        let c = (self.frame_size / 2) as i32;
        (c, c)
    }
}

impl Default for FilmstripConfig {
    fn default() -> Self {
        Self {
            frame_size: FRAME_SIZE,
            frame_count: FRAME_COUNT,
            start_angle_deg: START_ANGLE_DEG,
            end_angle_deg: END_ANGLE_DEG,
            style: KnobStyle::default(),
        }
    }
}
