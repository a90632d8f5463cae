//! # Automotion Vision
//!
//! Everything a failed validation leaves behind: the JSON record, the
//! annotated screenshot and the HTML page that collects them. Also hosts the
//! headless Chrome adapter that feeds live page geometry to the validator.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use automotion_vision::{ChromePage, HtmlReportBuilder, ReportOptions};
//!
//! let page = ChromePage::launch(1280, 800).unwrap();
//! page.navigate("https://example.com").unwrap();
//! let header = page.find("header").unwrap();
//!
//! // ... run validations against `page` ...
//!
//! let builder = HtmlReportBuilder::new(ReportOptions::default());
//! let report = builder.build_from_dir("result").unwrap();
//! println!("Report: {}", report.display());
//! ```

mod chrome;
mod html;
mod overlay;
mod server;
mod types;
mod writer;

pub use chrome::{ChromeElement, ChromePage};
pub use html::HtmlReportBuilder;
pub use overlay::paint_overlay;
pub use image::Rgba;
pub use types::{
    Detail, Guide, Overlay, OverlayStyle, ReportOptions, ReportRecord, DEFAULT_OUTPUT_DIR,
};
pub use writer::{load_records, ArtifactName, ReportWriter};

use automotion_common::CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] CommonError),
}

pub type Result<T> = std::result::Result<T, VisionError>;
