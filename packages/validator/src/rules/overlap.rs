use crate::compare;
use crate::session::Session;
use automotion_common::Driver;

impl<'d, D: Driver> Session<'d, D> {
    /// Root overlaps `element` exactly when `expected` says so
    pub(crate) fn check_overlap(&mut self, element: &D::Element, name: &str, expected: bool) {
        if self.is_root(element) {
            return;
        }
        let (Some(root), Some(other)) = (self.root_rect(), self.rect_of(element)) else {
            return;
        };

        let overlapped = compare::overlaps(&root, &other);
        if overlapped != expected {
            let message = if overlapped {
                format!(
                    "Element '{}' is overlapped with element '{}' but should not",
                    self.root_name(),
                    name
                )
            } else {
                format!(
                    "Element '{}' is not overlapped with element '{}' but should be",
                    self.root_name(),
                    name
                )
            };
            self.log_mut().push_with_element(message, other);
        }
    }

    pub(crate) fn check_not_overlap_all(&mut self, elements: &[D::Element]) {
        for element in elements {
            if let Some(name) = self.describe(element) {
                self.check_overlap(element, &name, false);
            }
        }
    }

    /// No two chunk members overlap.
    ///
    /// Each member is reported at most once, for the first other member it
    /// overlaps.
    pub(crate) fn check_chunk_not_overlapped(&mut self) {
        let elements = self.chunk_elements();
        let Some(rects) = self.rects_of(&elements) else {
            return;
        };

        for (i, rect) in rects.iter().enumerate() {
            let clash = rects
                .iter()
                .enumerate()
                .any(|(j, other)| elements[i] != elements[j] && compare::overlaps(rect, other));
            if clash {
                self.log_mut().push_with_element("Elements are overlapped", *rect);
            }
        }
    }
}
