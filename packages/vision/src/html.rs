//! HTML report over persisted validation records
//!
//! Emits one self-contained page listing every failed session with its
//! annotated screenshot and messages. Screenshots are referenced, not inlined.

use crate::types::{ReportOptions, ReportRecord};
use crate::writer::load_records;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Builds `<output_dir>/<name>.html` from records
pub struct HtmlReportBuilder {
    options: ReportOptions,
}

impl HtmlReportBuilder {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Build a report from the given record files
    pub fn build(&self, name: &str, record_files: &[PathBuf]) -> Result<PathBuf> {
        let mut records = Vec::with_capacity(record_files.len());
        for path in record_files {
            let content = std::fs::read_to_string(path)?;
            records.push(serde_json::from_str::<ReportRecord>(&content)?);
        }
        self.write(name, &records)
    }

    /// Build a report from every record in the JSON directory
    pub fn build_from_dir(&self, name: &str) -> Result<PathBuf> {
        let records: Vec<ReportRecord> = load_records(&self.options.json_dir())?
            .into_iter()
            .map(|(_, record)| record)
            .collect();
        self.write(name, &records)
    }

    fn write(&self, name: &str, records: &[ReportRecord]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.options.output_dir)?;

        let path = self.options.output_dir.join(format!("{}.html", name));
        std::fs::write(&path, render_report(name, records, Path::new("img")))?;

        info!(path = %path.display(), records = records.len(), "Wrote HTML report");
        Ok(path)
    }
}

/// Render the full HTML document
pub fn render_report(title: &str, records: &[ReportRecord], img_dir: &Path) -> String {
    let failed = records.iter().filter(|r| r.error).count();

    let mut sections = String::new();
    for record in records {
        sections.push_str(&render_record(record, img_dir));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 24px;
        }}
        section {{
            border: 1px solid #ddd;
            border-radius: 4px;
            margin-bottom: 24px;
            padding: 16px;
        }}
        .meta {{ color: #666; }}
        .failed {{ color: #c00; }}
        img {{ max-width: 100%; border: 1px solid #eee; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <p class="meta">{failed} failed of {total} recorded</p>
{sections}</body>
</html>"#,
        title = escape_html(title),
        failed = failed,
        total = records.len(),
        sections = sections
    )
}

fn render_record(record: &ReportRecord, img_dir: &Path) -> String {
    let mut html = String::new();
    html.push_str("    <section>\n");
    html.push_str(&format!(
        "        <h2 class=\"{}\">{}</h2>\n",
        if record.error { "failed" } else { "passed" },
        escape_html(&record.element_name)
    ));
    html.push_str(&format!(
        "        <p class=\"meta\">Scenario: {} &middot; {} &middot; root {}</p>\n",
        escape_html(&record.scenario),
        escape_html(&record.time_execution),
        record.root_element
    ));

    html.push_str("        <ul>\n");
    for detail in &record.details {
        html.push_str(&format!(
            "            <li>{}</li>\n",
            escape_html(&detail.reason.message)
        ));
    }
    html.push_str("        </ul>\n");

    if !record.screenshot.is_empty() {
        let src = img_dir.join(&record.screenshot);
        html.push_str(&format!(
            "        <img src=\"{}\" alt=\"{}\">\n",
            escape_html(&src.to_string_lossy()),
            escape_html(&record.element_name)
        ));
    }

    html.push_str("    </section>\n");
    html
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{ArtifactName, ReportWriter};
    use automotion_common::{Rect, ValidationError};
    use tempfile::tempdir;

    fn record(name: &str, message: &str) -> ReportRecord {
        ReportRecord {
            error: true,
            details: vec![ValidationError::new(message).into()],
            scenario: "Checkout".to_string(),
            root_element: Rect::new(0, 0, 10, 10),
            time_execution: "5 milliseconds".to_string(),
            element_name: name.to_string(),
            screenshot: format!("{}-screenshot.png", name),
        }
    }

    #[test]
    fn test_render_lists_messages_and_screenshot() {
        let html = render_report(
            "result",
            &[record("Header", "Element 'Header' is not inside of 'Page'")],
            Path::new("img"),
        );

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("1 failed of 1 recorded"));
        assert!(html.contains("Element &#39;Header&#39; is not inside of &#39;Page&#39;"));
        assert!(html.contains("img/Header-screenshot.png"));
    }

    #[test]
    fn test_build_from_dir() {
        let dir = tempdir().unwrap();
        let options = ReportOptions::new(dir.path());
        let writer = ReportWriter::new(options.clone());
        writer
            .write_record(&record("Menu", "Elements are overlapped"), &ArtifactName::new("Menu"))
            .unwrap();
        writer
            .write_record(&record("Footer", "<b>bad</b>"), &ArtifactName::new("Footer"))
            .unwrap();

        let path = HtmlReportBuilder::new(options).build_from_dir("nightly").unwrap();
        assert_eq!(path, dir.path().join("nightly.html"));

        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("2 failed of 2 recorded"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }
}
