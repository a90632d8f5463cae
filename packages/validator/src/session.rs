//! State owned by one validation pass

use crate::alignment::{AlignmentChecker, ProjectionAlignment};
use crate::compare::Edge;
use crate::log::ErrorLog;
use automotion_common::{to_pixels, Axis, CommonError, Driver, Rect, Units, ViewportMetrics};
use automotion_vision::ReportOptions;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

pub const DEFAULT_SCENARIO: &str = "Default";

/// Name used for the root when the caller gives none
pub const DEFAULT_ROOT_NAME: &str = "Root Element";

/// Options a session starts with; inherited by every session a
/// [`ResponsiveValidator`](crate::ResponsiveValidator) opens
#[derive(Clone)]
pub struct SessionSettings {
    pub scenario: String,
    pub units: Units,

    /// Write a record and an annotated screenshot when the session fails
    pub draw_map: bool,

    /// Shift overlay shapes below the mobile status bar
    pub top_bar: bool,

    pub report: ReportOptions,
    pub alignment: Rc<dyn AlignmentChecker>,

    /// Records written by sessions sharing these settings
    pub(crate) records: Rc<RefCell<Vec<PathBuf>>>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            scenario: DEFAULT_SCENARIO.to_string(),
            units: Units::Px,
            draw_map: false,
            top_bar: false,
            report: ReportOptions::default(),
            alignment: Rc::new(ProjectionAlignment),
            records: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

/// Which guide lines to draw through the root on the screenshot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawHints {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl DrawHints {
    pub fn mark(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.left = true,
            Edge::Right => self.right = true,
            Edge::Top => self.top = true,
            Edge::Bottom => self.bottom = true,
        }
    }
}

/// What a session validates
#[derive(Debug, Clone)]
pub enum Target<E> {
    /// One root element driving root-relative rules
    Single { element: E, name: String },

    /// An ordered list validated pairwise; the first member is the root
    Chunk { elements: Vec<E> },
}

impl<E> Target<E> {
    pub fn root(&self) -> Option<&E> {
        match self {
            Target::Single { element, .. } => Some(element),
            Target::Chunk { elements } => elements.first(),
        }
    }

    pub fn root_name(&self) -> &str {
        match self {
            Target::Single { name, .. } => name,
            Target::Chunk { .. } => DEFAULT_ROOT_NAME,
        }
    }

    pub fn elements(&self) -> &[E] {
        match self {
            Target::Single { element, .. } => std::slice::from_ref(element),
            Target::Chunk { elements } => elements,
        }
    }

    pub fn is_chunk(&self) -> bool {
        matches!(self, Target::Chunk { .. })
    }
}

/// One validation pass from init to its terminal call.
///
/// Everything mutable lives here, so independent sessions never observe each
/// other's errors, units or hints.
pub struct Session<'d, D: Driver> {
    driver: &'d D,
    target: Target<D::Element>,
    settings: SessionSettings,
    viewport: ViewportMetrics,
    hints: DrawHints,
    log: ErrorLog,
    started: Instant,
}

impl<'d, D: Driver> Session<'d, D> {
    /// Start a session, reading the viewport once.
    ///
    /// An unreadable viewport is recorded as a failure and replaced by an
    /// empty one.
    pub fn open(driver: &'d D, target: Target<D::Element>, settings: SessionSettings) -> Self {
        let mut log = ErrorLog::new();
        let viewport = match driver.viewport() {
            Ok(viewport) => viewport,
            Err(e) => {
                warn!(error = %e, "Could not read viewport");
                log.push(format!("Unable to read viewport metrics: {}", e));
                ViewportMetrics::default()
            }
        };

        debug!(
            scenario = %settings.scenario,
            root = target.root_name(),
            width = viewport.page_width,
            height = viewport.page_height,
            zoom = %viewport.zoom,
            "Opened validation session"
        );

        Self {
            driver,
            target,
            settings,
            viewport,
            hints: DrawHints::default(),
            log,
            started: Instant::now(),
        }
    }

    pub fn driver(&self) -> &'d D {
        self.driver
    }

    pub fn target(&self) -> &Target<D::Element> {
        &self.target
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn viewport(&self) -> &ViewportMetrics {
        &self.viewport
    }

    pub fn hints(&self) -> DrawHints {
        self.hints
    }

    pub fn log(&self) -> &ErrorLog {
        &self.log
    }

    pub fn root_name(&self) -> &str {
        self.target.root_name()
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub(crate) fn set_units(&mut self, units: Units) {
        self.settings.units = units;
    }

    pub(crate) fn mark_guide(&mut self, edge: Edge) {
        self.hints.mark(edge);
    }

    pub(crate) fn log_mut(&mut self) -> &mut ErrorLog {
        &mut self.log
    }

    /// Convert a caller-supplied constraint into pixels
    pub(crate) fn px(&self, value: i32, axis: Axis) -> i32 {
        to_pixels(value, axis, &self.viewport, self.settings.units)
    }

    pub(crate) fn is_root(&self, element: &D::Element) -> bool {
        self.target.root() == Some(element)
    }

    /// Current geometry of an element.
    ///
    /// A failed read is recorded so the session cannot pass on missing data.
    pub(crate) fn rect_of(&mut self, element: &D::Element) -> Option<Rect> {
        match self.driver.rect(element) {
            Ok(rect) => Some(rect),
            Err(e) => {
                self.read_failed(e);
                None
            }
        }
    }

    /// Geometry of every element, or `None` if any read fails
    pub(crate) fn rects_of(&mut self, elements: &[D::Element]) -> Option<Vec<Rect>> {
        let mut rects = Vec::with_capacity(elements.len());
        for element in elements {
            rects.push(self.rect_of(element)?);
        }
        Some(rects)
    }

    pub(crate) fn root_rect(&mut self) -> Option<Rect> {
        let root = self.target.root().cloned()?;
        self.rect_of(&root)
    }

    /// Formatted summary of an element, used in place of a readable name
    pub(crate) fn describe(&mut self, element: &D::Element) -> Option<String> {
        let rect = self.rect_of(element)?;
        match self.driver.summary(element) {
            Ok(summary) => Some(summary.describe(&rect)),
            Err(e) => {
                self.read_failed(e);
                None
            }
        }
    }

    pub(crate) fn read_failed(&mut self, error: CommonError) {
        warn!(error = %error, "Could not read element");
        self.log.push(format!("Unable to read element: {}", error));
    }

    pub(crate) fn chunk_elements(&self) -> Vec<D::Element> {
        self.target.elements().to_vec()
    }

    pub(crate) fn into_parts(self) -> SessionParts<'d, D> {
        SessionParts {
            driver: self.driver,
            target: self.target,
            settings: self.settings,
            viewport: self.viewport,
            hints: self.hints,
            log: self.log,
            started: self.started,
        }
    }
}

/// A concluded session taken apart for reporting
pub(crate) struct SessionParts<'d, D: Driver> {
    pub driver: &'d D,
    pub target: Target<D::Element>,
    pub settings: SessionSettings,
    pub viewport: ViewportMetrics,
    pub hints: DrawHints,
    pub log: ErrorLog,
    pub started: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use automotion_common::MockPage;

    #[test]
    fn test_open_reads_viewport() {
        let page = MockPage::new(ViewportMetrics::desktop(1024, 768));
        let header = page.add_element("header", Rect::new(0, 0, 1024, 80));

        let session = Session::open(
            &page,
            Target::Single {
                element: header,
                name: "Header".to_string(),
            },
            SessionSettings::default(),
        );
        assert_eq!(session.viewport().page_width, 1024);
        assert!(session.log().is_empty());
        assert_eq!(session.root_name(), "Header");
    }

    #[test]
    fn test_unreadable_viewport_fails_session() {
        let page = MockPage::without_viewport();
        let session: Session<'_, MockPage> = Session::open(
            &page,
            Target::Chunk {
                elements: Vec::new(),
            },
            SessionSettings::default(),
        );
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.viewport().page_width, 0);
    }

    #[test]
    fn test_chunk_root_is_first_member() {
        let page = MockPage::new(ViewportMetrics::desktop(800, 600));
        let a = page.add_element("a", Rect::new(0, 0, 10, 10));
        let b = page.add_element("b", Rect::new(20, 0, 10, 10));

        let mut session = Session::open(
            &page,
            Target::Chunk {
                elements: vec![a.clone(), b.clone()],
            },
            SessionSettings::default(),
        );
        assert!(session.is_root(&a));
        assert!(!session.is_root(&b));
        assert_eq!(session.root_name(), DEFAULT_ROOT_NAME);
        assert_eq!(session.root_rect(), Some(Rect::new(0, 0, 10, 10)));
    }

    #[test]
    fn test_missing_element_is_recorded() {
        let page = MockPage::new(ViewportMetrics::desktop(800, 600));
        let gone = page.add_element("gone", Rect::new(0, 0, 10, 10));
        page.remove_element(&gone);

        let mut session = Session::open(
            &page,
            Target::Single {
                element: gone.clone(),
                name: "Gone".to_string(),
            },
            SessionSettings::default(),
        );
        assert_eq!(session.rect_of(&gone), None);
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn test_percent_units_convert_against_viewport() {
        let page = MockPage::new(ViewportMetrics::desktop(1000, 500));
        let el = page.add_element("el", Rect::new(0, 0, 10, 10));
        let mut settings = SessionSettings::default();
        settings.units = Units::Percent;

        let target = Target::Single {
            element: el,
            name: "El".into(),
        };
        let session = Session::open(&page, target, settings);
        assert_eq!(session.px(10, Axis::Horizontal), 100);
        assert_eq!(session.px(10, Axis::Vertical), 50);
    }

    #[test]
    fn test_draw_hints() {
        let mut hints = DrawHints::default();
        hints.mark(Edge::Left);
        hints.mark(Edge::Bottom);
        assert_eq!(
            hints,
            DrawHints {
                left: true,
                right: false,
                top: false,
                bottom: true,
            }
        );
    }
}
