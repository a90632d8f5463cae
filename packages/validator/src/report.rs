//! Concluding a session: the verdict and, when requested, its artifacts

use crate::session::{DrawHints, SessionParts};
use crate::transform::CoordinateTransformer;
use crate::Session;
use automotion_common::{Driver, Rect, ValidationError, ViewportMetrics};
use automotion_vision::{
    paint_overlay, ArtifactName, Detail, Guide, Overlay, ReportRecord, ReportWriter,
};
use std::path::PathBuf;
use tracing::{error, info};

/// Message recorded when a session ends without a root element
pub const NO_ROOT_MESSAGE: &str = "Set root web element";

/// Result of a concluded session
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub passed: bool,

    /// Failures in the order they were recorded
    pub errors: Vec<ValidationError>,

    /// JSON record written for a failed session with draw-map enabled
    pub record_path: Option<PathBuf>,

    /// Annotated screenshot written alongside the record
    pub screenshot_path: Option<PathBuf>,
}

impl ValidationOutcome {
    fn new(passed: bool, errors: Vec<ValidationError>) -> Self {
        Self {
            passed,
            errors,
            record_path: None,
            screenshot_path: None,
        }
    }
}

impl<'d, D: Driver> Session<'d, D> {
    /// End the session.
    ///
    /// Without a root the outcome is a single precondition failure. A failed
    /// session with draw-map enabled also writes its screenshot and record;
    /// problems writing them are logged and never change the verdict.
    pub fn conclude(self) -> ValidationOutcome {
        let parts = self.into_parts();

        let Some(root) = parts.target.root().cloned() else {
            info!(scenario = %parts.settings.scenario, "Validation failed: no root element");
            return ValidationOutcome::new(false, vec![ValidationError::new(NO_ROOT_MESSAGE)]);
        };

        if parts.log.is_empty() {
            info!(
                scenario = %parts.settings.scenario,
                element = parts.target.root_name(),
                "Validation passed"
            );
            return ValidationOutcome::new(true, Vec::new());
        }

        info!(
            scenario = %parts.settings.scenario,
            element = parts.target.root_name(),
            errors = parts.log.len(),
            "Validation failed"
        );

        if !parts.settings.draw_map {
            return ValidationOutcome::new(false, parts.log.into_errors());
        }

        let root_rect = match parts.driver.rect(&root) {
            Ok(rect) => rect,
            Err(e) => {
                error!(error = %e, "Could not read root element for report");
                Rect::default()
            }
        };
        write_artifacts(parts, root_rect)
    }
}

fn write_artifacts<D: Driver>(parts: SessionParts<'_, D>, root: Rect) -> ValidationOutcome {
    let element_name = parts.target.root_name().to_string();
    let name = ArtifactName::new(&element_name);
    let writer = ReportWriter::new(parts.settings.report.clone());
    let errors = parts.log.into_errors();

    let screenshot_path = match parts.driver.screenshot() {
        Ok(png) => {
            let overlay = build_overlay(
                &parts.viewport,
                parts.settings.top_bar,
                parts.hints,
                root,
                &errors,
            );
            let painted = match paint_overlay(&png, &overlay, &parts.settings.report.style) {
                Ok(painted) => painted,
                Err(e) => {
                    error!(error = %e, "Could not annotate screenshot");
                    png
                }
            };
            match writer.write_screenshot(&painted, &name) {
                Ok(path) => Some(path),
                Err(e) => {
                    error!(error = %e, "Could not write screenshot");
                    None
                }
            }
        }
        Err(e) => {
            error!(error = %e, "Failed to capture screenshot");
            None
        }
    };

    let record = ReportRecord {
        error: true,
        details: errors.iter().cloned().map(Detail::from).collect(),
        scenario: parts.settings.scenario.clone(),
        root_element: root,
        time_execution: format!("{} milliseconds", parts.started.elapsed().as_millis()),
        element_name,
        screenshot: screenshot_path
            .as_ref()
            .map(|_| name.screenshot_file())
            .unwrap_or_default(),
    };

    let record_path = match writer.write_record(&record, &name) {
        Ok(path) => {
            parts.settings.records.borrow_mut().push(path.clone());
            Some(path)
        }
        Err(e) => {
            error!(error = %e, "Cannot create json report");
            None
        }
    };

    ValidationOutcome {
        passed: false,
        errors,
        record_path,
        screenshot_path,
    }
}

/// Shapes for a failed session, in screenshot pixels
pub fn build_overlay(
    viewport: &ViewportMetrics,
    top_bar: bool,
    hints: DrawHints,
    root: Rect,
    errors: &[ValidationError],
) -> Overlay {
    let transformer = CoordinateTransformer::new(viewport, top_bar);

    let mut guides = Vec::new();
    if hints.left {
        guides.push(Guide::Vertical(transformer.map_x(root.x)));
    }
    if hints.right {
        guides.push(Guide::Vertical(transformer.map_x(root.right())));
    }
    if hints.top {
        guides.push(Guide::Horizontal(transformer.map_y(root.y)));
    }
    if hints.bottom {
        guides.push(Guide::Horizontal(transformer.map_y(root.bottom())));
    }

    Overlay {
        root: Some(transformer.map_rect(&root)),
        highlights: errors
            .iter()
            .filter_map(|e| e.element)
            .map(|rect| transformer.map_rect(&rect))
            .collect(),
        guides,
    }
}
