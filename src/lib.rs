//! Knob Filmstrip Library
//!
//! Procedurally renders a rotary knob at evenly spaced angles and stacks the
//! frames into a vertical PNG sprite sheet ("filmstrip") for DAW UI controls.
//!
//! # Features
//!
//! - Render single knob frames at any indicator angle
//! - Assemble the full strip and write it as PNG
//! - Look up and extract frames from an existing strip
//!
//! # Example
//!
//! ```no_run
//! use knob_filmstrip::FilmstripConfig;
//! use knob_filmstrip::render::{assemble, save_png};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FilmstripConfig::default();
//!     let strip = assemble(&config);
//!     save_png(&strip, Path::new("knob.png"))?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod render;

// Re-exports for convenience
pub use config::{FilmstripConfig, KnobStyle};
pub use error::{FilmstripError, Result};
pub use layout::FrameRect;
