use crate::session::Session;
use automotion_common::{Axis, Driver, Rect};

/// Where a neighbour sits relative to the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Above,
    Below,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Above => "Above",
            Side::Below => "Below",
        }
    }

    fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Above | Side::Below => Axis::Vertical,
        }
    }

    /// Gap between the root and a neighbour on this side
    fn margin(self, root: &Rect, neighbour: &Rect) -> i32 {
        match self {
            Side::Left => root.x - neighbour.right(),
            Side::Right => neighbour.x - root.right(),
            Side::Above => root.y - neighbour.bottom(),
            Side::Below => neighbour.y - root.bottom(),
        }
    }
}

impl<'d, D: Driver> Session<'d, D> {
    /// Neighbour lines up with the root on the cross axis
    pub(crate) fn check_adjacent(&mut self, side: Side, element: &D::Element) {
        let (Some(root), Some(neighbour)) = (self.root_rect(), self.rect_of(element)) else {
            return;
        };

        let checker = self.settings().alignment.clone();
        let aligned = match side {
            Side::Left => checker.aligned_horizontally(&[neighbour, root]),
            Side::Right => checker.aligned_horizontally(&[root, neighbour]),
            Side::Above => checker.aligned_vertically(&[neighbour, root]),
            Side::Below => checker.aligned_vertically(&[root, neighbour]),
        };
        if !aligned {
            self.log_mut()
                .push(format!("{} element aligned not properly", side.label()));
        }
    }

    /// Gap between the root and a neighbour falls within `[min, max]`
    pub(crate) fn check_adjacent_within(
        &mut self,
        side: Side,
        element: &D::Element,
        min: i32,
        max: i32,
    ) {
        let min = self.px(min, side.axis());
        let max = self.px(max, side.axis());
        let (Some(root), Some(neighbour)) = (self.root_rect(), self.rect_of(element)) else {
            return;
        };

        let margin = side.margin(&root, &neighbour);
        if margin < min || margin > max {
            let message = format!(
                "{} element aligned not properly. Expected margin should be between {}px and {}px. Actual margin is {}px",
                side.label(),
                min,
                max,
                margin
            );
            self.log_mut().push_with_element(message, neighbour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::single;
    use automotion_common::{MockPage, ViewportMetrics};

    #[test]
    fn test_margins_by_side() {
        let root = Rect::new(100, 100, 100, 100);
        assert_eq!(Side::Left.margin(&root, &Rect::new(0, 100, 90, 10)), 10);
        assert_eq!(Side::Right.margin(&root, &Rect::new(215, 100, 10, 10)), 15);
        assert_eq!(Side::Above.margin(&root, &Rect::new(100, 0, 10, 80)), 20);
        assert_eq!(Side::Below.margin(&root, &Rect::new(100, 200, 10, 10)), 0);
    }

    #[test]
    fn test_margin_band_is_inclusive() {
        let page = MockPage::new(ViewportMetrics::desktop(1000, 800));
        let root = page.add_element("root", Rect::new(100, 100, 100, 100));
        let below = page.add_element("below", Rect::new(100, 220, 100, 50));
        let mut session = single(&page, &root);

        session.check_adjacent_within(Side::Below, &below, 20, 20);
        session.check_adjacent_within(Side::Below, &below, 0, 20);
        assert!(session.log().is_empty());

        session.check_adjacent_within(Side::Below, &below, 21, 30);
        let error = &session.log().errors()[0];
        assert_eq!(
            error.message,
            "Below element aligned not properly. Expected margin should be between 21px and 30px. Actual margin is 20px"
        );
        assert_eq!(error.element, Some(Rect::new(100, 220, 100, 50)));
    }

    #[test]
    fn test_overlapping_neighbour_has_negative_margin() {
        let page = MockPage::new(ViewportMetrics::desktop(1000, 800));
        let root = page.add_element("root", Rect::new(100, 100, 100, 100));
        let left = page.add_element("left", Rect::new(50, 100, 60, 100));
        let mut session = single(&page, &root);

        session.check_adjacent_within(Side::Left, &left, 0, 10);
        assert!(session.log().errors()[0].message.ends_with("Actual margin is -10px"));
    }

    #[test]
    fn test_adjacent_without_margin() {
        let page = MockPage::new(ViewportMetrics::desktop(1000, 800));
        let root = page.add_element("root", Rect::new(100, 100, 100, 100));
        let right = page.add_element("right", Rect::new(300, 150, 50, 50));
        let far_below = page.add_element("far", Rect::new(300, 400, 50, 50));
        let mut session = single(&page, &root);

        session.check_adjacent(Side::Right, &right);
        assert!(session.log().is_empty());

        session.check_adjacent(Side::Right, &far_below);
        session.check_adjacent(Side::Below, &far_below);
        let messages: Vec<&str> = session
            .log()
            .errors()
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["Right element aligned not properly", "Below element aligned not properly"]
        );
        assert!(session.log().errors()[0].element.is_none());
    }
}
