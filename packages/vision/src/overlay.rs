//! Painting highlight boxes and guide lines onto a screenshot

use crate::types::{Guide, Overlay, OverlayStyle};
use crate::Result;
use automotion_common::Rect;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tracing::debug;

/// Decode a PNG, paint the overlay on it and encode it again.
///
/// Shapes are clipped to the image; anything fully outside is ignored.
pub fn paint_overlay(png: &[u8], overlay: &Overlay, style: &OverlayStyle) -> Result<Vec<u8>> {
    let mut img = image::load_from_memory(png)?.to_rgba8();

    if let Some(root) = &overlay.root {
        stroke_rect(&mut img, root, style.root_color, style.stroke);
    }

    for guide in &overlay.guides {
        dashed_line(&mut img, *guide, style.lines_color, style.dash);
    }

    for highlight in &overlay.highlights {
        stroke_rect(&mut img, highlight, style.highlight_color, style.stroke);
    }

    debug!(
        width = img.width(),
        height = img.height(),
        highlights = overlay.highlights.len(),
        guides = overlay.guides.len(),
        "Painted overlay"
    );

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Part of `start..=end` that falls inside `0..len`
fn clamp_span(start: i64, end: i64, len: u32) -> std::ops::RangeInclusive<i64> {
    start.max(0)..=end.min(i64::from(len) - 1)
}

/// Outline a rectangle with a stroke drawn inward from its edges
fn stroke_rect(img: &mut RgbaImage, rect: &Rect, color: Rgba<u8>, stroke: u32) {
    let left = i64::from(rect.x);
    let top = i64::from(rect.y);
    let right = i64::from(rect.x) + i64::from(rect.width);
    let bottom = i64::from(rect.y) + i64::from(rect.height);

    for t in 0..i64::from(stroke.max(1)) {
        for x in clamp_span(left, right, img.width()) {
            put(img, x, top + t, color);
            put(img, x, bottom - t, color);
        }
        for y in clamp_span(top, bottom, img.height()) {
            put(img, left + t, y, color);
            put(img, right - t, y, color);
        }
    }
}

fn dashed_line(img: &mut RgbaImage, guide: Guide, color: Rgba<u8>, dash: u32) {
    let dash = i64::from(dash.max(1));
    let on = |i: i64| (i / dash) % 2 == 0;

    match guide {
        Guide::Vertical(x) => {
            for y in 0..i64::from(img.height()) {
                if on(y) {
                    put(img, i64::from(x), y, color);
                }
            }
        }
        Guide::Horizontal(y) => {
            for x in 0..i64::from(img.width()) {
                if on(x) {
                    put(img, x, i64::from(y), color);
                }
            }
        }
    }
}
