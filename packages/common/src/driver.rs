//! Collaborator contracts the engine reads live page state through.
//!
//! A browser or device adapter implements these traits; the engine never
//! caches what they return.

use crate::rect::Rect;
use crate::result::CommonResult;
use crate::viewport::ViewportMetrics;
use std::fmt::Debug;

/// Reads geometry and style of elements on the rendering surface
pub trait ElementAccessor {
    /// Opaque handle to an element
    type Element: Clone + PartialEq + Debug;

    /// Current bounding box in logical pixels
    fn rect(&self, element: &Self::Element) -> CommonResult<Rect>;

    /// Computed value of a CSS property, empty when the property is not set
    fn css_value(&self, element: &Self::Element, property: &str) -> CommonResult<String>;

    /// Tag, attributes and text used to describe an element in messages
    fn summary(&self, element: &Self::Element) -> CommonResult<ElementSummary>;
}

/// Reads the current viewport snapshot
pub trait ViewportProvider {
    fn viewport(&self) -> CommonResult<ViewportMetrics>;
}

/// Captures the current render as PNG bytes
pub trait ScreenshotProvider {
    fn screenshot(&self) -> CommonResult<Vec<u8>>;
}

/// Everything a validation session needs from the page
pub trait Driver: ElementAccessor + ViewportProvider + ScreenshotProvider {}

impl<T> Driver for T where T: ElementAccessor + ViewportProvider + ScreenshotProvider {}

/// Descriptive attributes of an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSummary {
    pub tag: String,
    pub id: String,
    pub class: String,
    pub text: String,
}

impl ElementSummary {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Readable name for an element that was not given one by the caller
    pub fn describe(&self, rect: &Rect) -> String {
        format!(
            "with properties: tag=[{}], id=[{}], class=[{}], text=[{}], coord=[{},{}], size=[{},{}]",
            self.tag,
            self.id,
            self.class,
            short_text(&self.text),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        )
    }
}

fn short_text(text: &str) -> String {
    if text.chars().count() < 10 {
        text.to_string()
    } else {
        let head: String = text.chars().take(10).collect();
        format!("{}...", head)
    }
}
