//! Knob frame rendering.
//!
//! Draws one knob glyph per frame: body with outline, indicator line from the
//! center towards the current angle, a dot on the indicator tip and a hub on
//! top. Angles are measured from the top, clockwise, as on a rotary control.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use std::f32::consts::PI;

use crate::config::{FilmstripConfig, colors};

/// Convert degrees to radians
fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Indicator angle for frame `index` of `count`, evenly spaced from `start_deg`
/// to `end_deg` inclusive.
pub fn angle_for_frame(index: u32, count: u32, start_deg: f32, end_deg: f32) -> f32 {
    if count <= 1 {
        return start_deg;
    }
    let t = index as f32 / (count - 1) as f32;
    start_deg + t * (end_deg - start_deg)
}

/// End point of the indicator at `angle_deg`, in image coordinates.
pub fn indicator_tip(center: (i32, i32), length: f32, angle_deg: f32) -> (f32, f32) {
    let angle_rad = deg_to_rad(angle_deg) - PI / 2.0; // -90 so that 0 points up
    let px = center.0 as f32 + length * angle_rad.cos();
    let py = center.1 as f32 + length * angle_rad.sin(); // y increases downwards
    (px, py)
}

/// Draw a straight line of the given width as a filled quad.
fn draw_thick_line(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1.0 {
        return;
    }

    // Perpendicular offset of half the width
    let nx = -dy / len * width / 2.0;
    let ny = dx / len * width / 2.0;

    let corner = |x: f32, y: f32| Point::new(x.round() as i32, y.round() as i32);
    let quad = [
        corner(from.0 + nx, from.1 + ny),
        corner(to.0 + nx, to.1 + ny),
        corner(to.0 - nx, to.1 - ny),
        corner(from.0 - nx, from.1 - ny),
    ];

    // draw_polygon_mut rejects a closed polygon
    if quad[0] == quad[3] {
        return;
    }
    draw_polygon_mut(img, &quad, color);
}

/// Render a single knob frame with the indicator at `angle_deg`.
pub fn render_frame(config: &FilmstripConfig, angle_deg: f32) -> RgbaImage {
    let style = &config.style;
    let mut img = RgbaImage::from_pixel(config.frame_size, config.frame_size, colors::TRANSPARENT);
    let center = config.frame_center();

    // Body: outline disc, then the fill inset by the outline width
    draw_filled_circle_mut(&mut img, center, style.body_radius, style.outline_color);
    draw_filled_circle_mut(
        &mut img,
        center,
        style.body_radius - style.outline_width,
        style.body_color,
    );

    let tip = indicator_tip(center, style.indicator_length(), angle_deg);
    draw_thick_line(
        &mut img,
        (center.0 as f32, center.1 as f32),
        tip,
        style.indicator_width,
        style.indicator_color,
    );

    draw_filled_circle_mut(
        &mut img,
        (tip.0.round() as i32, tip.1.round() as i32),
        style.tip_dot_radius,
        style.indicator_color,
    );

    // Hub last so it covers the indicator root
    draw_filled_circle_mut(&mut img, center, style.hub_radius, style.hub_color);

    img
}

/// Render frame `index` of the strip described by `config`.
pub fn render_frame_at(config: &FilmstripConfig, index: u32) -> RgbaImage {
    let angle = angle_for_frame(
        index,
        config.frame_count,
        config.start_angle_deg,
        config.end_angle_deg,
    );
    render_frame(config, angle)
}
