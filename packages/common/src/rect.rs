//! Axis-aligned element rectangles

use serde::{Deserialize, Serialize};

/// Bounding box of an element in integer CSS pixels.
///
/// A rectangle is a snapshot taken when the geometry was queried; it is never
/// refreshed. Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle, clamping a negative size to zero
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Grow the rectangle outward by the given amount on each side
    pub fn expand(&self, top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self::new(
            self.x.saturating_sub(left),
            self.y.saturating_sub(top),
            self.width.saturating_add(left).saturating_add(right),
            self.height.saturating_add(top).saturating_add(bottom),
        )
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}x{}]",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_corners() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let rect = Rect::new(0, 0, -5, -1);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_expand() {
        let rect = Rect::new(100, 100, 200, 100).expand(10, 20, 10, 20);
        assert_eq!(rect, Rect::new(80, 90, 240, 120));
    }

    #[test]
    fn test_extreme_geometry_saturates() {
        let rect = Rect::new(i32::MAX - 5, i32::MAX - 5, 100, 100);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);

        let grown = Rect::new(i32::MIN + 1, 0, i32::MAX, 10).expand(0, 10, 0, 10);
        assert_eq!(grown.x, i32::MIN);
        assert_eq!(grown.width, i32::MAX);
    }

    #[test]
    fn test_serializes_as_plain_box() {
        let json = serde_json::to_value(Rect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1, "y": 2, "width": 3, "height": 4}));
    }
}
