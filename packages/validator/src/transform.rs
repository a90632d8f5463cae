//! Mapping logical page coordinates onto screenshot pixels.
//!
//! Screenshots are captured at physical resolution while element geometry is
//! reported in CSS pixels, and mobile browsers shift the visible page below
//! the native status bar. Only overlay painting uses this; pass/fail logic
//! always works in logical pixels.

use automotion_common::{Platform, Rect, ViewportMetrics};

/// Height of the mobile status bar in logical pixels
pub const STATUS_BAR_OFFSET: i32 = 20;

/// iOS devices whose screenshots are taken at twice the logical resolution
pub const IOS_RETINA_DEVICES: &[&str] = &[
    "iPhone 4",
    "iPhone 4s",
    "iPhone 5",
    "iPhone 5s",
    "iPhone 6",
    "iPhone 6s",
    "iPad Mini 2",
    "iPad Mini 4",
    "iPad Air 2",
    "iPad Pro",
];

pub struct CoordinateTransformer<'a> {
    viewport: &'a ViewportMetrics,
    top_bar: bool,
}

impl<'a> CoordinateTransformer<'a> {
    /// `top_bar` adds the status bar offset to vertical coordinates in a
    /// mobile web context
    pub fn new(viewport: &'a ViewportMetrics, top_bar: bool) -> Self {
        Self { viewport, top_bar }
    }

    /// Apply zoom and density corrections to a length or coordinate
    pub fn scale(&self, value: i32) -> i32 {
        if !self.viewport.is_mobile() {
            let value = self.unzoom(value);
            if self.viewport.is_retina && self.viewport.logical_pixels {
                value.saturating_mul(2)
            } else {
                value
            }
        } else if self.is_retina_ios() {
            value.saturating_mul(2)
        } else {
            value
        }
    }

    /// Shift a vertical coordinate below the status bar when needed
    pub fn status_bar(&self, y: i32) -> i32 {
        let shifted = self.viewport.is_mobile() && self.viewport.mobile_web_context && self.top_bar;
        if shifted {
            y.saturating_add(STATUS_BAR_OFFSET)
        } else {
            y
        }
    }

    pub fn map_x(&self, x: i32) -> i32 {
        self.scale(x)
    }

    pub fn map_y(&self, y: i32) -> i32 {
        self.scale(self.status_bar(y))
    }

    /// Map a logical rectangle into screenshot space
    pub fn map_rect(&self, rect: &Rect) -> Rect {
        Rect::new(
            self.map_x(rect.x),
            self.map_y(rect.y),
            self.scale(rect.width),
            self.scale(rect.height),
        )
    }

    fn unzoom(&self, value: i32) -> i32 {
        let zoom = self.viewport.zoom_percent();
        let delta = f64::from(value) * (zoom - 100.0).abs() / 100.0;
        if zoom > 100.0 {
            (f64::from(value) + delta) as i32
        } else if zoom < 100.0 {
            (f64::from(value) - delta) as i32
        } else {
            value
        }
    }

    fn is_retina_ios(&self) -> bool {
        self.viewport.platform == Platform::Ios
            && self
                .viewport
                .device_name
                .as_deref()
                .map(|device| IOS_RETINA_DEVICES.contains(&device))
                .unwrap_or(false)
    }
}
