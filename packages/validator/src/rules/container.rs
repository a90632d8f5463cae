use crate::compare;
use crate::session::Session;
use automotion_common::{Axis, Driver};

/// Required space between a container's edges and the root, clockwise from
/// the top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical and horizontal padding, CSS shorthand style
    pub fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

impl<'d, D: Driver> Session<'d, D> {
    /// The root, or every chunk member, lies within `container`
    pub(crate) fn check_inside(&mut self, container: &D::Element, name: &str) {
        let Some(outer) = self.rect_of(container) else {
            return;
        };

        if self.target().is_chunk() {
            for element in self.chunk_elements() {
                if let Some(inner) = self.rect_of(&element) {
                    if !compare::contains(&outer, &inner) {
                        let message = format!("Element is not inside of '{}'", name);
                        self.log_mut().push_with_element(message, outer);
                    }
                }
            }
        } else if let Some(root) = self.root_rect() {
            if !compare::contains(&outer, &root) {
                let message = format!("Element '{}' is not inside of '{}'", self.root_name(), name);
                self.log_mut().push_with_element(message, outer);
            }
        }
    }

    /// The root grown by `padding` still lies within `container`
    pub(crate) fn check_inside_with_padding(
        &mut self,
        container: &D::Element,
        name: &str,
        padding: Padding,
    ) {
        let top = self.px(padding.top, Axis::Vertical);
        let right = self.px(padding.right, Axis::Horizontal);
        let bottom = self.px(padding.bottom, Axis::Vertical);
        let left = self.px(padding.left, Axis::Horizontal);

        let (Some(root), Some(outer)) = (self.root_rect(), self.rect_of(container)) else {
            return;
        };

        let padded = root.expand(top, right, bottom, left);
        if compare::contains(&outer, &padded) {
            return;
        }

        let actual = Padding::new(
            root.y - outer.y,
            outer.right() - root.right(),
            outer.bottom() - root.bottom(),
            root.x - outer.x,
        );
        let message = format!(
            "Padding of element '{}' in '{}' is incorrect. Expected padding: top[{}], right[{}], bottom[{}], left[{}]. Actual padding: top[{}], right[{}], bottom[{}], left[{}]",
            self.root_name(),
            name,
            top,
            right,
            bottom,
            left,
            actual.top,
            actual.right,
            actual.bottom,
            actual.left
        );
        self.log_mut().push_with_element(message, outer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{chunk, single};
    use automotion_common::{MockPage, Rect, Units, ViewportMetrics};

    #[test]
    fn test_inside_is_boundary_inclusive() {
        let page = MockPage::new(ViewportMetrics::desktop(1000, 800));
        let root = page.add_element("root", Rect::new(0, 0, 100, 100));
        let exact = page.add_element("exact", Rect::new(0, 0, 100, 100));
        let small = page.add_element("small", Rect::new(10, 10, 50, 50));
        let mut session = single(&page, &root);

        session.check_inside(&exact, "Exact");
        assert!(session.log().is_empty());

        session.check_inside(&small, "Small");
        let error = &session.log().errors()[0];
        assert_eq!(error.message, "Element 'Root' is not inside of 'Small'");
        assert_eq!(error.element, Some(Rect::new(10, 10, 50, 50)));
    }

    #[test]
    fn test_chunk_members_inside() {
        let page = MockPage::new(ViewportMetrics::desktop(1000, 800));
        let container = page.add_element("container", Rect::new(0, 0, 300, 100));
        let a = page.add_element("a", Rect::new(0, 0, 100, 100));
        let b = page.add_element("b", Rect::new(250, 0, 100, 100));
        let mut session = chunk(&page, &[a, b]);

        session.check_inside(&container, "Container");
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log().errors()[0].message, "Element is not inside of 'Container'");
    }

    #[test]
    fn test_padding_reports_actual_values() {
        let page = MockPage::new(ViewportMetrics::desktop(1000, 800));
        let root = page.add_element("root", Rect::new(10, 10, 80, 80));
        let container = page.add_element("container", Rect::new(0, 0, 100, 100));
        let mut session = single(&page, &root);

        session.check_inside_with_padding(&container, "Box", Padding::uniform(10));
        assert!(session.log().is_empty());

        session.check_inside_with_padding(&container, "Box", Padding::new(10, 10, 10, 11));
        let error = &session.log().errors()[0];
        assert_eq!(
            error.message,
            "Padding of element 'Root' in 'Box' is incorrect. Expected padding: top[10], right[10], bottom[10], left[11]. Actual padding: top[10], right[10], bottom[10], left[10]"
        );
        assert_eq!(error.element, Some(Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn test_padding_in_percent() {
        let page = MockPage::new(ViewportMetrics::desktop(200, 100));
        let root = page.add_element("root", Rect::new(10, 10, 180, 80));
        let container = page.add_element("container", Rect::new(0, 0, 200, 100));
        let mut session = single(&page, &root);
        session.set_units(Units::Percent);

        // 5% of 200 horizontally, 10% of 100 vertically
        session.check_inside_with_padding(&container, "Page", Padding::symmetric(10, 5));
        assert!(session.log().is_empty());
    }
}
