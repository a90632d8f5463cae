//! Core types for Automotion reports

use automotion_common::{Rect, ValidationError};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default directory that records and screenshots are written under
pub const DEFAULT_OUTPUT_DIR: &str = "target/automotion";

/// One persisted record per failed validation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    /// Whether the session failed
    pub error: bool,

    /// Failures in the order they were recorded
    pub details: Vec<Detail>,

    pub scenario: String,

    /// Geometry of the root element at report time
    pub root_element: Rect,

    /// Wall time of the session, e.g. "42 milliseconds"
    pub time_execution: String,

    /// Readable name of the root element
    pub element_name: String,

    /// File name of the annotated screenshot under the image directory
    pub screenshot: String,
}

/// Wrapper matching the `{ "reason": { ... } }` shape of a detail entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub reason: ValidationError,
}

impl From<ValidationError> for Detail {
    fn from(reason: ValidationError) -> Self {
        Self { reason }
    }
}

/// A guide line drawn across the whole screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guide {
    /// Vertical line at the given x
    Vertical(i32),

    /// Horizontal line at the given y
    Horizontal(i32),
}

/// Shapes to paint onto a screenshot, already in screenshot pixels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub root: Option<Rect>,
    pub highlights: Vec<Rect>,
    pub guides: Vec<Guide>,
}

/// Colours and strokes used when painting an overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub root_color: Rgba<u8>,
    pub highlight_color: Rgba<u8>,
    pub lines_color: Rgba<u8>,

    /// Stroke width of boxes in pixels
    pub stroke: u32,

    /// Length of a dash (and of the gap after it) in guide lines
    pub dash: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            root_color: Rgba([255, 0, 0, 255]),
            highlight_color: Rgba([255, 0, 255, 255]),
            lines_color: Rgba([255, 200, 0, 255]),
            stroke: 2,
            dash: 9,
        }
    }
}

/// Where report artifacts go and how they look
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Root output directory; records go to `json/`, screenshots to `img/`
    pub output_dir: PathBuf,

    pub style: OverlayStyle,
}

impl ReportOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            style: OverlayStyle::default(),
        }
    }

    pub fn json_dir(&self) -> PathBuf {
        self.output_dir.join("json")
    }

    pub fn img_dir(&self) -> PathBuf {
        self.output_dir.join("img")
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_report_field_names() {
        let record = ReportRecord {
            error: true,
            details: vec![
                ValidationError::new("Below element aligned not properly").into(),
                ValidationError::with_element("Elements are overlapped", Rect::new(1, 2, 3, 4))
                    .into(),
            ],
            scenario: "Default".to_string(),
            root_element: Rect::new(0, 0, 100, 50),
            time_execution: "12 milliseconds".to_string(),
            element_name: "Header".to_string(),
            screenshot: "Header-screenshot1a.png".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["rootElement"]["width"], 100);
        assert_eq!(json["timeExecution"], "12 milliseconds");
        assert_eq!(json["elementName"], "Header");
        assert_eq!(
            json["details"][0]["reason"]["message"],
            "Below element aligned not properly"
        );
        assert!(json["details"][0]["reason"].get("element").is_none());
        assert_eq!(json["details"][1]["reason"]["element"]["x"], 1);

        let parsed: ReportRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_default_directories() {
        let options = ReportOptions::default();
        assert_eq!(options.json_dir(), PathBuf::from("target/automotion/json"));
        assert_eq!(options.img_dir(), PathBuf::from("target/automotion/img"));
    }
}
