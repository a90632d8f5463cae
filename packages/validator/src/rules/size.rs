use crate::session::Session;
use automotion_common::{Axis, Driver, Rect};

/// Which measurements a size comparison looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Size,
    WidthOnly,
    HeightOnly,
}

impl SizeKind {
    fn name(self) -> &'static str {
        match self {
            SizeKind::Size => "size",
            SizeKind::WidthOnly => "width",
            SizeKind::HeightOnly => "height",
        }
    }

    fn same(self, a: &Rect, b: &Rect) -> bool {
        match self {
            SizeKind::Size => a.width == b.width && a.height == b.height,
            SizeKind::WidthOnly => a.width == b.width,
            SizeKind::HeightOnly => a.height == b.height,
        }
    }
}

/// A single dimension with a lower or upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    fn name(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }

    fn axis(self) -> Axis {
        match self {
            Dimension::Width => Axis::Horizontal,
            Dimension::Height => Axis::Vertical,
        }
    }

    fn of(self, rect: &Rect) -> i32 {
        match self {
            Dimension::Width => rect.width,
            Dimension::Height => rect.height,
        }
    }
}

impl<'d, D: Driver> Session<'d, D> {
    pub(crate) fn check_min_dimension(&mut self, dimension: Dimension, value: i32) {
        let limit = self.px(value, dimension.axis());
        let Some(root) = self.root_rect() else {
            return;
        };
        let actual = dimension.of(&root);
        if actual < limit {
            let message = format!(
                "Expected min {} of element '{}' is: {}px. Actual {} is: {}px",
                dimension.name(),
                self.root_name(),
                limit,
                dimension.name(),
                actual
            );
            self.log_mut().push(message);
        }
    }

    pub(crate) fn check_max_dimension(&mut self, dimension: Dimension, value: i32) {
        let limit = self.px(value, dimension.axis());
        let Some(root) = self.root_rect() else {
            return;
        };
        let actual = dimension.of(&root);
        if actual > limit {
            let message = format!(
                "Expected max {} of element '{}' is: {}px. Actual {} is: {}px",
                dimension.name(),
                self.root_name(),
                limit,
                dimension.name(),
                actual
            );
            self.log_mut().push(message);
        }
    }

    /// Root and `element` agree on the measurements of `kind`
    pub(crate) fn check_same_size(&mut self, kind: SizeKind, element: &D::Element, name: &str) {
        if self.is_root(element) {
            return;
        }
        let (Some(root), Some(other)) = (self.root_rect(), self.rect_of(element)) else {
            return;
        };
        if kind.same(&root, &other) {
            return;
        }

        let root_name = self.root_name();
        let message = match kind {
            SizeKind::Size => format!(
                "Element '{}' has not the same size as {}. Size of '{}' is {}px x {}px. Size of element is {}px x {}px",
                root_name, name, root_name, root.width, root.height, other.width, other.height
            ),
            SizeKind::WidthOnly => format!(
                "Element '{}' has not the same width as {}. Width of '{}' is {}px. Width of element is {}px",
                root_name, name, root_name, root.width, other.width
            ),
            SizeKind::HeightOnly => format!(
                "Element '{}' has not the same height as {}. Height of '{}' is {}px. Height of element is {}px",
                root_name, name, root_name, root.height, other.height
            ),
        };
        self.log_mut().push_with_element(message, other);
    }

    /// Root and `element` differ in width or height
    pub(crate) fn check_not_same_size(&mut self, element: &D::Element, name: &str) {
        if self.is_root(element) {
            return;
        }
        let (Some(root), Some(other)) = (self.root_rect(), self.rect_of(element)) else {
            return;
        };
        if SizeKind::Size.same(&root, &other) {
            let root_name = self.root_name();
            let message = format!(
                "Element '{}' has the same size as {}. Size of '{}' is {}px x {}px. Size of element is {}px x {}px",
                root_name, name, root_name, root.width, root.height, other.width, other.height
            );
            self.log_mut().push_with_element(message, other);
        }
    }

    pub(crate) fn check_same_size_all(&mut self, kind: SizeKind, elements: &[D::Element]) {
        for element in elements {
            if let Some(name) = self.describe(element) {
                self.check_same_size(kind, element, &name);
            }
        }
    }

    pub(crate) fn check_not_same_size_all(&mut self, elements: &[D::Element]) {
        for element in elements {
            if let Some(name) = self.describe(element) {
                self.check_not_same_size(element, &name);
            }
        }
    }

    /// Consecutive chunk members agree (`expect_same`) or differ on `kind`.
    ///
    /// A failing pair reports both of its members.
    pub(crate) fn check_chunk_size(&mut self, kind: SizeKind, expect_same: bool) {
        let elements = self.chunk_elements();
        let Some(rects) = self.rects_of(&elements) else {
            return;
        };

        let verdict = if expect_same { "different" } else { "same" };
        for (i, pair) in rects.windows(2).enumerate() {
            if kind.same(&pair[0], &pair[1]) == expect_same {
                continue;
            }
            for (offset, rect) in pair.iter().enumerate() {
                let message = format!(
                    "Element #{} has {} {}. Element {} is: [{}, {}]",
                    i + 1 + offset,
                    verdict,
                    kind.name(),
                    kind.name(),
                    rect.width,
                    rect.height
                );
                self.log_mut().push_with_element(message, *rect);
            }
        }
    }
}
