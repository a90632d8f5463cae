use crate::compare::{self, Edge};
use crate::session::Session;
use automotion_common::{Axis, Driver, Rect};
use tracing::debug;

/// Offsets at or below this are treated as unset; a min/max offset rule with
/// any such side is skipped entirely
pub const MIN_OFFSET: i32 = -10000;

#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
}

impl Bound {
    fn name(self) -> &'static str {
        match self {
            Bound::Min => "min",
            Bound::Max => "max",
        }
    }

    fn violated(self, actual: i32, limit: i32) -> bool {
        match self {
            Bound::Min => actual < limit,
            Bound::Max => actual > limit,
        }
    }
}

impl<'d, D: Driver> Session<'d, D> {
    /// Root and `element` share the given edge
    pub(crate) fn check_same_edge(&mut self, edge: Edge, element: &D::Element, name: &str) {
        if self.is_root(element) {
            return;
        }
        let (Some(root), Some(other)) = (self.root_rect(), self.rect_of(element)) else {
            return;
        };
        debug!(edge = edge.name(), "Checking same offset");

        if !compare::equal_edge(edge, &root, &other) {
            let message = format!(
                "Element '{}' has not the same {} offset as element '{}'",
                self.root_name(),
                edge.name(),
                name
            );
            self.log_mut().push_with_element(message, other);
        }
    }

    /// Like [`check_same_edge`](Self::check_same_edge) for each element,
    /// naming them by their summary
    pub(crate) fn check_same_edge_all(&mut self, edge: Edge, elements: &[D::Element]) {
        for element in elements {
            if let Some(name) = self.describe(element) {
                self.check_same_edge(edge, element, &name);
            }
        }
    }

    /// Consecutive chunk members share the given edge
    pub(crate) fn check_chunk_same_edge(&mut self, edge: Edge) {
        let elements = self.chunk_elements();
        let Some(rects) = self.rects_of(&elements) else {
            return;
        };

        for (i, pair) in rects.windows(2).enumerate() {
            if !compare::equal_edge(edge, &pair[0], &pair[1]) {
                let message = format!(
                    "Element #{} has not the same {} offset as element #{}",
                    i + 1,
                    edge.name(),
                    i + 2
                );
                self.log_mut().push_with_element(message, pair[1]);
            }
        }
    }

    pub(crate) fn check_min_offset(&mut self, top: i32, right: i32, bottom: i32, left: i32) {
        self.check_offset_bound(Bound::Min, top, right, bottom, left);
    }

    pub(crate) fn check_max_offset(&mut self, top: i32, right: i32, bottom: i32, left: i32) {
        self.check_offset_bound(Bound::Max, top, right, bottom, left);
    }

    fn check_offset_bound(&mut self, bound: Bound, top: i32, right: i32, bottom: i32, left: i32) {
        let top = self.px(top, Axis::Vertical);
        let right = self.px(right, Axis::Horizontal);
        let bottom = self.px(bottom, Axis::Vertical);
        let left = self.px(left, Axis::Horizontal);

        if [top, right, bottom, left].iter().any(|side| *side <= MIN_OFFSET) {
            debug!(bound = bound.name(), "Skipping offset rule with unset side");
            return;
        }
        let Some(root) = self.root_rect() else {
            return;
        };

        let actual = [
            ("left", root.x, left),
            ("top", root.y, top),
            ("right", compare::right_offset(&root, self.viewport()), right),
            ("bottom", compare::bottom_offset(&root, self.viewport()), bottom),
        ];
        for (side, offset, limit) in actual {
            if bound.violated(offset, limit) {
                let message = format!(
                    "Expected {} {} offset of element '{}' is: {}px. Actual {} offset is: {}px",
                    bound.name(),
                    side,
                    self.root_name(),
                    limit,
                    side,
                    offset
                );
                self.log_mut().push(message);
            }
        }
    }

    /// Root is horizontally centred on the page
    pub(crate) fn check_equal_left_right(&mut self) {
        let Some(root) = self.root_rect() else {
            return;
        };
        let name = self.root_name().to_string();
        self.push_unequal_left_right(&root, &name);
    }

    /// Root is vertically centred on the page
    pub(crate) fn check_equal_top_bottom(&mut self) {
        let Some(root) = self.root_rect() else {
            return;
        };
        let name = self.root_name().to_string();
        self.push_unequal_top_bottom(&root, &name);
    }

    pub(crate) fn check_chunk_equal_left_right(&mut self) {
        for element in self.chunk_elements() {
            if let (Some(rect), Some(name)) = (self.rect_of(&element), self.describe(&element)) {
                self.push_unequal_left_right(&rect, &name);
            }
        }
    }

    pub(crate) fn check_chunk_equal_top_bottom(&mut self) {
        for element in self.chunk_elements() {
            if let (Some(rect), Some(name)) = (self.rect_of(&element), self.describe(&element)) {
                self.push_unequal_top_bottom(&rect, &name);
            }
        }
    }

    fn push_unequal_left_right(&mut self, rect: &Rect, name: &str) {
        if !compare::has_equal_left_right(rect, self.viewport()) {
            let message = format!(
                "Element '{}' has not equal left and right offset. Left offset is {}px, right is {}px",
                name,
                rect.x,
                compare::right_offset(rect, self.viewport())
            );
            self.log_mut().push_with_element(message, *rect);
        }
    }

    fn push_unequal_top_bottom(&mut self, rect: &Rect, name: &str) {
        if !compare::has_equal_top_bottom(rect, self.viewport()) {
            let message = format!(
                "Element '{}' has not equal top and bottom offset. Top offset is {}px, bottom is {}px",
                name,
                rect.y,
                compare::bottom_offset(rect, self.viewport())
            );
            self.log_mut().push_with_element(message, *rect);
        }
    }
}
