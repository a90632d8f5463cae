//! Live page access through headless Chrome

use crate::server::start_fixture_server;
use crate::{Result, VisionError};
use automotion_common::{
    parse_zoom, CommonError, CommonResult, ElementAccessor, ElementSummary, Rect,
    ScreenshotProvider, ViewportMetrics, ViewportProvider,
};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

/// An element located by CSS selector and match index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChromeElement {
    pub selector: String,
    pub index: usize,
}

/// A browser tab the validator reads geometry from
pub struct ChromePage {
    // Keeps the browser process alive for as long as the tab is in use
    _browser: Option<Browser>,
    tab: Arc<Tab>,
}

#[derive(Deserialize)]
struct RawRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawViewport {
    inner_width: f64,
    inner_height: f64,
    body_width: f64,
    body_height: f64,
    zoom: String,
    ratio: f64,
}

#[derive(Deserialize)]
struct RawSummary {
    tag: String,
    id: String,
    class: String,
    text: String,
}

impl ChromePage {
    /// Launch headless Chrome with a window of the given size
    pub fn launch(width: u32, height: u32) -> Result<Self> {
        let browser = Browser::new(LaunchOptions {
            headless: true,
            window_size: Some((width, height)),
            ..Default::default()
        })
        .map_err(|e| VisionError::Browser(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| VisionError::Browser(e.to_string()))?;

        info!(width, height, "Launched headless Chrome");

        Ok(Self {
            _browser: Some(browser),
            tab,
        })
    }

    /// Wrap a tab owned by the caller
    pub fn from_tab(tab: Arc<Tab>) -> Self {
        Self {
            _browser: None,
            tab,
        }
    }

    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Navigate and wait for the page to load
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| VisionError::Browser(e.to_string()))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| VisionError::Browser(e.to_string()))?;

        debug!(url, "Navigated");
        Ok(())
    }

    /// Load a standalone HTML document
    pub fn open_html(&self, html: impl Into<String>) -> Result<()> {
        let (url, server_handle) = start_fixture_server(html.into())?;
        self.navigate(&url)?;

        server_handle
            .join()
            .map_err(|_| VisionError::Browser("fixture server panicked".to_string()))?;
        Ok(())
    }

    /// First element matching a selector
    pub fn find(&self, selector: &str) -> Result<ChromeElement> {
        self.find_all(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| VisionError::Common(CommonError::ElementNotFound(selector.to_string())))
    }

    /// Every element matching a selector, in document order
    pub fn find_all(&self, selector: &str) -> Result<Vec<ChromeElement>> {
        let script = format!(
            "JSON.stringify(document.querySelectorAll({}).length)",
            js_string(selector)
        );
        let count: usize = serde_json::from_value(self.eval_json(&script)?)?;

        Ok((0..count)
            .map(|index| ChromeElement {
                selector: selector.to_string(),
                index,
            })
            .collect())
    }

    /// Evaluate a script that returns a JSON string and parse the result
    fn eval_json(&self, script: &str) -> CommonResult<serde_json::Value> {
        let value = self
            .tab
            .evaluate(script, false)
            .map_err(|e| CommonError::Driver(e.to_string()))?
            .value
            .ok_or_else(|| CommonError::Driver("script returned no value".to_string()))?;

        let json = value
            .as_str()
            .ok_or_else(|| CommonError::Driver("script did not return a JSON string".to_string()))?;

        Ok(serde_json::from_str(json)?)
    }

    /// Evaluate a script against one element, bound to `el`
    fn eval_on(&self, element: &ChromeElement, body: &str) -> CommonResult<serde_json::Value> {
        let script = format!(
            "(() => {{ const el = document.querySelectorAll({})[{}]; if (!el) {{ return JSON.stringify(null); }} {} }})()",
            js_string(&element.selector),
            element.index,
            body
        );

        let value = self.eval_json(&script)?;
        if value.is_null() {
            return Err(CommonError::ElementNotFound(format!(
                "{} #{}",
                element.selector, element.index
            )));
        }
        Ok(value)
    }
}

fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

impl ElementAccessor for ChromePage {
    type Element = ChromeElement;

    fn rect(&self, element: &ChromeElement) -> CommonResult<Rect> {
        let value = self.eval_on(
            element,
            "const r = el.getBoundingClientRect(); \
             return JSON.stringify({ x: r.left + window.scrollX, y: r.top + window.scrollY, width: r.width, height: r.height });",
        )?;
        let raw: RawRect = serde_json::from_value(value)?;

        Ok(Rect::new(
            raw.x.round() as i32,
            raw.y.round() as i32,
            raw.width.round() as i32,
            raw.height.round() as i32,
        ))
    }

    fn css_value(&self, element: &ChromeElement, property: &str) -> CommonResult<String> {
        let body = format!(
            "return JSON.stringify(window.getComputedStyle(el).getPropertyValue({}));",
            js_string(property)
        );
        let value = self.eval_on(element, &body)?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    fn summary(&self, element: &ChromeElement) -> CommonResult<ElementSummary> {
        let value = self.eval_on(
            element,
            "return JSON.stringify({ tag: el.tagName.toLowerCase(), id: el.id || '', \
             class: el.getAttribute('class') || '', text: (el.innerText || '').trim() });",
        )?;
        let raw: RawSummary = serde_json::from_value(value)?;

        Ok(ElementSummary {
            tag: raw.tag,
            id: raw.id,
            class: raw.class,
            text: raw.text,
        })
    }
}

impl ViewportProvider for ChromePage {
    fn viewport(&self) -> CommonResult<ViewportMetrics> {
        let value = self.eval_json(
            "JSON.stringify({ \
               inner_width: self.innerWidth || document.documentElement.clientWidth || document.body.clientWidth, \
               inner_height: self.innerHeight || document.documentElement.clientHeight || document.body.clientHeight, \
               body_width: document.body.offsetWidth, \
               body_height: document.body.offsetHeight, \
               zoom: document.body.style.zoom || '', \
               ratio: window.devicePixelRatio || 1 })",
        )?;
        let raw: RawViewport = serde_json::from_value(value)?;

        // A zoomed body reports its own box rather than the window's
        let zoomed = parse_zoom(&raw.zoom) != 100.0;
        let (width, height) = if zoomed {
            (raw.body_width, raw.body_height)
        } else {
            (raw.inner_width, raw.inner_height)
        };

        let zoom = if raw.zoom.is_empty() {
            automotion_common::DEFAULT_ZOOM.to_string()
        } else {
            raw.zoom
        };

        Ok(
            ViewportMetrics::desktop(width.round() as i32, height.round() as i32)
                .with_zoom(zoom)
                .with_retina(raw.ratio > 1.0, true),
        )
    }
}

impl ScreenshotProvider for ChromePage {
    fn screenshot(&self) -> CommonResult<Vec<u8>> {
        self.tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| CommonError::Driver(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("a[data-x=\"1\"]"), r#""a[data-x=\"1\"]""#);
        assert_eq!(js_string(".card"), "\".card\"");
    }
}
