//! Pure geometric comparisons between rectangles

use automotion_common::{Rect, ViewportMetrics};

/// An edge of a rectangle, also naming the offset to the matching viewport edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub fn name(&self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }

    /// Coordinate of this edge of a rectangle
    pub fn of(&self, rect: &Rect) -> i32 {
        match self {
            Edge::Left => rect.x,
            Edge::Right => rect.right(),
            Edge::Top => rect.y,
            Edge::Bottom => rect.bottom(),
        }
    }
}

/// Whether the interiors of two rectangles share a strictly positive area.
///
/// Rectangles touching along an edge or at a corner do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !a.is_empty()
        && !b.is_empty()
        && a.x < b.right()
        && b.x < a.right()
        && a.y < b.bottom()
        && b.y < a.bottom()
}

/// Boundary-inclusive containment of `inner` in `outer`
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

pub fn equal_edge(edge: Edge, a: &Rect, b: &Rect) -> bool {
    edge.of(a) == edge.of(b)
}

pub fn equal_left(a: &Rect, b: &Rect) -> bool {
    equal_edge(Edge::Left, a, b)
}

pub fn equal_right(a: &Rect, b: &Rect) -> bool {
    equal_edge(Edge::Right, a, b)
}

pub fn equal_top(a: &Rect, b: &Rect) -> bool {
    equal_edge(Edge::Top, a, b)
}

pub fn equal_bottom(a: &Rect, b: &Rect) -> bool {
    equal_edge(Edge::Bottom, a, b)
}

/// Distance from the right edge of a rectangle to the right of the page
pub fn right_offset(rect: &Rect, viewport: &ViewportMetrics) -> i32 {
    viewport.page_width - rect.right()
}

/// Distance from the bottom edge of a rectangle to the bottom of the page
pub fn bottom_offset(rect: &Rect, viewport: &ViewportMetrics) -> i32 {
    viewport.page_height - rect.bottom()
}

/// Horizontally centred on the page
pub fn has_equal_left_right(rect: &Rect, viewport: &ViewportMetrics) -> bool {
    rect.x == right_offset(rect, viewport)
}

/// Vertically centred on the page
pub fn has_equal_top_bottom(rect: &Rect, viewport: &ViewportMetrics) -> bool {
    rect.y == bottom_offset(rect, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_requires_positive_area() {
        let a = Rect::new(0, 0, 100, 100);
        assert!(overlaps(&a, &Rect::new(50, 50, 100, 100)));
        assert!(overlaps(&a, &Rect::new(10, 10, 10, 10)));

        // shared edge
        assert!(!overlaps(&a, &Rect::new(100, 0, 50, 100)));
        assert!(!overlaps(&a, &Rect::new(0, 100, 100, 50)));
        // shared corner
        assert!(!overlaps(&a, &Rect::new(100, 100, 10, 10)));
        // disjoint
        assert!(!overlaps(&a, &Rect::new(300, 300, 10, 10)));
        // degenerate
        assert!(!overlaps(&a, &Rect::new(10, 10, 0, 50)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 10, 10),
            Rect::new(10, 0, 10, 10),
            Rect::new(-5, -5, 30, 30),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(overlaps(a, b), overlaps(b, a));
            }
        }
    }

    #[test]
    fn test_contains_is_reflexive_and_antisymmetric() {
        let a = Rect::new(10, 10, 50, 50);
        let b = Rect::new(20, 20, 10, 10);
        assert!(contains(&a, &a));
        assert!(contains(&a, &b));
        assert!(!contains(&b, &a));

        let c = Rect::new(10, 10, 50, 50);
        assert!(contains(&a, &c) && contains(&c, &a));
        assert_eq!(a, c);
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let outer = Rect::new(0, 0, 100, 100);
        assert!(contains(&outer, &Rect::new(0, 0, 100, 100)));
        assert!(contains(&outer, &Rect::new(90, 90, 10, 10)));
        assert!(!contains(&outer, &Rect::new(91, 90, 10, 10)));
        assert!(!contains(&outer, &Rect::new(-1, 0, 10, 10)));
    }

    #[test]
    fn test_edge_equality() {
        let a = Rect::new(10, 20, 30, 40);
        let b = Rect::new(10, 0, 50, 60);
        assert!(equal_left(&a, &b));
        assert!(!equal_right(&a, &b));
        assert!(!equal_top(&a, &b));
        assert!(equal_bottom(&a, &b));
    }

    #[test]
    fn test_page_offsets() {
        let viewport = ViewportMetrics::desktop(1000, 800);
        let centred = Rect::new(100, 200, 800, 400);
        assert_eq!(right_offset(&centred, &viewport), 100);
        assert_eq!(bottom_offset(&centred, &viewport), 200);
        assert!(has_equal_left_right(&centred, &viewport));
        assert!(has_equal_top_bottom(&centred, &viewport));

        let shifted = Rect::new(101, 200, 800, 401);
        assert!(!has_equal_left_right(&shifted, &viewport));
        assert!(!has_equal_top_bottom(&shifted, &viewport));
    }
}
