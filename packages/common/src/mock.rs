//! In-memory page for exercising the engine without a browser

use crate::driver::{ElementAccessor, ElementSummary, ScreenshotProvider, ViewportProvider};
use crate::error::CommonError;
use crate::rect::Rect;
use crate::result::CommonResult;
use crate::viewport::ViewportMetrics;
use std::cell::RefCell;
use std::collections::HashMap;

/// Handle to an element of a [`MockPage`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MockElement(pub String);

#[derive(Debug, Clone)]
struct MockNode {
    rect: Rect,
    css: HashMap<String, String>,
    summary: ElementSummary,
}

/// Mock page for testing.
///
/// Elements can be moved or removed after creation; every query reflects the
/// state at the time of the call.
pub struct MockPage {
    elements: RefCell<HashMap<MockElement, MockNode>>,
    viewport: RefCell<Option<ViewportMetrics>>,
    screenshot: RefCell<Option<Vec<u8>>>,
}

impl MockPage {
    pub fn new(viewport: ViewportMetrics) -> Self {
        Self {
            elements: RefCell::new(HashMap::new()),
            viewport: RefCell::new(Some(viewport)),
            screenshot: RefCell::new(None),
        }
    }

    /// A page whose viewport cannot be read
    pub fn without_viewport() -> Self {
        let page = Self::new(ViewportMetrics::default());
        page.viewport.replace(None);
        page
    }

    pub fn add_element(&self, id: &str, rect: Rect) -> MockElement {
        let handle = MockElement(id.to_string());
        self.elements.borrow_mut().insert(
            handle.clone(),
            MockNode {
                rect,
                css: HashMap::new(),
                summary: ElementSummary::new("div").with_id(id),
            },
        );
        handle
    }

    pub fn move_element(&self, element: &MockElement, rect: Rect) {
        if let Some(node) = self.elements.borrow_mut().get_mut(element) {
            node.rect = rect;
        }
    }

    pub fn remove_element(&self, element: &MockElement) {
        self.elements.borrow_mut().remove(element);
    }

    pub fn set_css(&self, element: &MockElement, property: &str, value: &str) {
        if let Some(node) = self.elements.borrow_mut().get_mut(element) {
            node.css.insert(property.to_string(), value.to_string());
        }
    }

    pub fn set_summary(&self, element: &MockElement, summary: ElementSummary) {
        if let Some(node) = self.elements.borrow_mut().get_mut(element) {
            node.summary = summary;
        }
    }

    pub fn set_viewport(&self, viewport: ViewportMetrics) {
        self.viewport.replace(Some(viewport));
    }

    pub fn set_screenshot(&self, png: Vec<u8>) {
        self.screenshot.replace(Some(png));
    }

    fn node(&self, element: &MockElement) -> CommonResult<MockNode> {
        self.elements
            .borrow()
            .get(element)
            .cloned()
            .ok_or_else(|| CommonError::ElementNotFound(element.0.clone()))
    }
}

impl ElementAccessor for MockPage {
    type Element = MockElement;

    fn rect(&self, element: &MockElement) -> CommonResult<Rect> {
        Ok(self.node(element)?.rect)
    }

    fn css_value(&self, element: &MockElement, property: &str) -> CommonResult<String> {
        Ok(self
            .node(element)?
            .css
            .get(property)
            .cloned()
            .unwrap_or_default())
    }

    fn summary(&self, element: &MockElement) -> CommonResult<ElementSummary> {
        Ok(self.node(element)?.summary)
    }
}

impl ViewportProvider for MockPage {
    fn viewport(&self) -> CommonResult<ViewportMetrics> {
        self.viewport
            .borrow()
            .clone()
            .ok_or_else(|| CommonError::Driver("viewport is not available".to_string()))
    }
}

impl ScreenshotProvider for MockPage {
    fn screenshot(&self) -> CommonResult<Vec<u8>> {
        self.screenshot
            .borrow()
            .clone()
            .ok_or_else(|| CommonError::Driver("screenshot is not available".to_string()))
    }
}
