//! Filmstrip assembly and PNG output.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage, imageops};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use super::knob::{angle_for_frame, render_frame};
use crate::config::FilmstripConfig;
use crate::error::Result;

/// Render every frame and stack them top to bottom.
///
/// Frame `i` lands at vertical offset `i * frame_size`, left-aligned, so the
/// consumer can select a frame by row. Pasting replaces pixels rather than
/// blending.
#[tracing::instrument(skip(config), fields(frames = config.frame_count, size = config.frame_size))]
pub fn assemble(config: &FilmstripConfig) -> RgbaImage {
    let mut strip = RgbaImage::new(config.frame_size, config.strip_height());

    for index in 0..config.frame_count {
        let angle = angle_for_frame(
            index,
            config.frame_count,
            config.start_angle_deg,
            config.end_angle_deg,
        );
        let frame = render_frame(config, angle);

        let y_offset = index as i64 * config.frame_size as i64;
        imageops::replace(&mut strip, &frame, 0, y_offset);
        debug!(index, angle, y_offset, "frame placed");
    }

    strip
}

/// PNG-encode the strip into `writer`.
fn write_png<W: Write>(strip: &RgbaImage, writer: W) -> Result<()> {
    PngEncoder::new(writer).write_image(
        strip.as_raw(),
        strip.width(),
        strip.height(),
        ColorType::Rgba8,
    )?;
    Ok(())
}

/// Write the strip to `path` as PNG.
///
/// Filesystem failures surface as `FilmstripError::Io`, encoder failures as
/// `FilmstripError::Image`.
pub fn save_png(strip: &RgbaImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_png(strip, &mut writer)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        width = strip.width(),
        height = strip.height(),
        "filmstrip written"
    );
    Ok(())
}

/// Encode the strip to PNG bytes in memory.
pub fn encode_png(strip: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(strip, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::colors;
    use crate::error::FilmstripError;
    use crate::render::knob::render_frame_at;
    use std::path::PathBuf;

    fn temp_png(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "knob_filmstrip_{}_{}.png",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_strip_dimensions() {
        let config = FilmstripConfig::default();
        let strip = assemble(&config);
        assert_eq!(strip.dimensions(), (100, 6400));
    }

    #[test]
    fn test_every_slot_holds_a_knob() {
        let config = FilmstripConfig::default();
        let strip = assemble(&config);
        let size = config.frame_size;

        for i in 0..config.frame_count {
            let top = i * size;
            // Center is the hub, corners stay transparent
            assert_eq!(*strip.get_pixel(50, top + 50), colors::HUB);
            assert_eq!(*strip.get_pixel(0, top), colors::TRANSPARENT);
            assert_eq!(*strip.get_pixel(99, top + 99), colors::TRANSPARENT);
            // Body reaches the same distance in all four directions
            for (x, y) in [(50, 11), (50, 89), (11, 50), (89, 50)] {
                assert_eq!(strip.get_pixel(x, top + y)[3], 255);
            }
        }
    }

    #[test]
    fn test_slots_follow_frame_order() {
        let config = FilmstripConfig::default();
        let strip = assemble(&config);

        for i in [0, 1, 31, 62, 63] {
            let expected = render_frame_at(&config, i);
            let slot = imageops::crop_imm(&strip, 0, i * 100, 100, 100).to_image();
            assert_eq!(slot, expected, "slot {} does not match frame {}", i, i);
        }
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let config = FilmstripConfig::default();
        let first = encode_png(&assemble(&config)).unwrap();
        let second = encode_png(&assemble(&config)).unwrap();
        assert!(first.starts_with(b"\x89PNG"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_png_roundtrip() {
        let config = FilmstripConfig::default();
        let strip = assemble(&config);
        let path = temp_png("roundtrip");

        save_png(&strip, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, strip);
    }

    #[test]
    fn test_saved_file_is_deterministic() {
        let config = FilmstripConfig::default();
        let first_path = temp_png("first");
        let second_path = temp_png("second");

        save_png(&assemble(&config), &first_path).unwrap();
        save_png(&assemble(&config), &second_path).unwrap();
        let first = std::fs::read(&first_path).unwrap();
        let second = std::fs::read(&second_path).unwrap();
        std::fs::remove_file(&first_path).unwrap();
        std::fs::remove_file(&second_path).unwrap();

        assert_eq!(first, second);
        // Same bytes as the in-memory encoding
        assert_eq!(first, encode_png(&assemble(&config)).unwrap());
    }

    #[test]
    fn test_save_png_unwritable_path() {
        let strip = RgbaImage::new(10, 10);
        let path = Path::new("/nonexistent-dir/knob_filmstrip.png");
        assert!(matches!(
            save_png(&strip, path),
            Err(FilmstripError::Io(_))
        ));
    }
}
