//! Margin-less adjacency checks

use automotion_common::Rect;

/// Decides whether consecutive rectangles line up along an axis.
///
/// Used by the adjacency rules that take no margin. Swap in a custom
/// implementation through the builder when a layout needs a looser notion of
/// alignment.
pub trait AlignmentChecker {
    /// Consecutive rectangles share part of their horizontal extent, so they
    /// sit in one column
    fn aligned_vertically(&self, rects: &[Rect]) -> bool;

    /// Consecutive rectangles share part of their vertical extent, so they
    /// sit in one row
    fn aligned_horizontally(&self, rects: &[Rect]) -> bool;
}

/// Projection overlap on the cross axis
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionAlignment;

impl AlignmentChecker for ProjectionAlignment {
    fn aligned_vertically(&self, rects: &[Rect]) -> bool {
        rects.windows(2).all(|pair| {
            intervals_intersect(pair[0].x, pair[0].right(), pair[1].x, pair[1].right())
        })
    }

    fn aligned_horizontally(&self, rects: &[Rect]) -> bool {
        rects.windows(2).all(|pair| {
            intervals_intersect(pair[0].y, pair[0].bottom(), pair[1].y, pair[1].bottom())
        })
    }
}

fn intervals_intersect(start_a: i32, end_a: i32, start_b: i32, end_b: i32) -> bool {
    start_a < end_b && start_b < end_a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_alignment_uses_x_projection() {
        let checker = ProjectionAlignment;
        let top = Rect::new(0, 0, 100, 50);
        let below = Rect::new(50, 100, 100, 50);
        let beside = Rect::new(100, 100, 100, 50);

        assert!(checker.aligned_vertically(&[top, below]));
        assert!(!checker.aligned_vertically(&[top, beside]));
    }

    #[test]
    fn test_horizontal_alignment_uses_y_projection() {
        let checker = ProjectionAlignment;
        let left = Rect::new(0, 0, 50, 100);
        let right = Rect::new(100, 90, 50, 100);
        let lower = Rect::new(100, 100, 50, 100);

        assert!(checker.aligned_horizontally(&[left, right]));
        assert!(!checker.aligned_horizontally(&[left, lower]));
    }

    #[test]
    fn test_only_consecutive_pairs_matter() {
        let checker = ProjectionAlignment;
        let a = Rect::new(0, 0, 100, 10);
        let b = Rect::new(90, 20, 100, 10);
        let c = Rect::new(180, 40, 100, 10);
        // a and c do not share any x range but each neighbour pair does
        assert!(checker.aligned_vertically(&[a, b, c]));
    }

    #[test]
    fn test_trivial_inputs_are_aligned() {
        let checker = ProjectionAlignment;
        assert!(checker.aligned_vertically(&[]));
        assert!(checker.aligned_horizontally(&[Rect::new(0, 0, 1, 1)]));
    }
}
