//! Viewport snapshot taken when a validation session starts

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// Default zoom reported by browsers that have not been zoomed
pub const DEFAULT_ZOOM: &str = "100%";

/// Platform the page is rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Desktop,
    Ios,
    Android,
}

impl Platform {
    pub fn is_mobile(&self) -> bool {
        !matches!(self, Platform::Desktop)
    }
}

/// Page dimensions and display characteristics of the rendering surface.
///
/// The zoom is kept as the raw string the browser reported and parsed into a
/// percentage the first time it is needed.
#[derive(Debug, Clone)]
pub struct ViewportMetrics {
    /// Page width in logical pixels
    pub page_width: i32,

    /// Page height in logical pixels
    pub page_height: i32,

    /// Zoom as reported by the page (e.g. "110%")
    pub zoom: String,

    /// Whether the display has a device pixel ratio above 1
    pub is_retina: bool,

    /// Whether the browser engine reports geometry in logical rather than
    /// physical pixels
    pub logical_pixels: bool,

    pub platform: Platform,

    /// Device name reported by a mobile driver (e.g. "iPhone 6")
    pub device_name: Option<String>,

    /// Whether a mobile driver is in a web (not native) context
    pub mobile_web_context: bool,

    zoom_percent: OnceCell<f64>,
}

impl ViewportMetrics {
    /// Desktop viewport of the given size at 100% zoom
    pub fn desktop(page_width: i32, page_height: i32) -> Self {
        Self {
            page_width,
            page_height,
            zoom: DEFAULT_ZOOM.to_string(),
            is_retina: false,
            logical_pixels: false,
            platform: Platform::Desktop,
            device_name: None,
            mobile_web_context: false,
            zoom_percent: OnceCell::new(),
        }
    }

    /// Mobile viewport of the given size, in a web context
    pub fn mobile(
        platform: Platform,
        device_name: impl Into<String>,
        page_width: i32,
        page_height: i32,
    ) -> Self {
        Self {
            platform,
            device_name: Some(device_name.into()),
            mobile_web_context: true,
            ..Self::desktop(page_width, page_height)
        }
    }

    pub fn with_zoom(mut self, zoom: impl Into<String>) -> Self {
        self.zoom = zoom.into();
        self.zoom_percent = OnceCell::new();
        self
    }

    pub fn with_retina(mut self, is_retina: bool, logical_pixels: bool) -> Self {
        self.is_retina = is_retina;
        self.logical_pixels = logical_pixels;
        self
    }

    pub fn with_mobile_web_context(mut self, web: bool) -> Self {
        self.mobile_web_context = web;
        self
    }

    /// Zoom as a percentage, parsed once and memoised
    pub fn zoom_percent(&self) -> f64 {
        *self.zoom_percent.get_or_init(|| parse_zoom(&self.zoom))
    }

    pub fn is_mobile(&self) -> bool {
        self.platform.is_mobile()
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self::desktop(0, 0)
    }
}

/// Parse a zoom value as reported by `document.body.style.zoom`.
///
/// Empty, `normal` and unparsable values mean 100%. A bare number up to 10 is
/// a ratio ("1.5"), anything larger is already a percentage.
pub fn parse_zoom(raw: &str) -> f64 {
    let raw = raw.trim();
    if let Some(percent) = raw.strip_suffix('%') {
        return match percent.trim().parse::<f64>() {
            Ok(value) if value > 0.0 => value,
            _ => 100.0,
        };
    }

    match raw.parse::<f64>() {
        Ok(value) if value > 0.0 && value <= 10.0 => value * 100.0,
        Ok(value) if value > 10.0 => value,
        _ => 100.0,
    }
}
