//! Fluent entry points
//!
//! [`ResponsiveValidator`] carries options and opens sessions.
//! [`UiValidator`] validates one root element, [`ChunkValidator`] an ordered
//! list. Both consume and return themselves so rules chain; every rule only
//! appends failures.

use crate::alignment::AlignmentChecker;
use crate::compare::Edge;
use crate::report::ValidationOutcome;
use crate::rules::{Dimension, Padding, Side, SizeKind};
use crate::session::{Session, SessionSettings, Target};
use automotion_common::{Driver, Units};
use automotion_vision::{HtmlReportBuilder, ReportOptions, Rgba};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, error, info};

/// Options shared by the sessions it opens
pub struct ResponsiveValidator<'d, D: Driver> {
    driver: &'d D,
    settings: SessionSettings,
}

impl<'d, D: Driver> ResponsiveValidator<'d, D> {
    pub fn new(driver: &'d D) -> Self {
        Self {
            driver,
            settings: SessionSettings::default(),
        }
    }

    /// Start a new validation with the default scenario name.
    ///
    /// Colours, report options, draw-map and the alignment checker carry
    /// over; scenario and units start from their defaults.
    pub fn init(&self) -> Self {
        self.init_with_scenario(crate::session::DEFAULT_SCENARIO)
    }

    pub fn init_with_scenario(&self, scenario: &str) -> Self {
        let settings = SessionSettings {
            scenario: scenario.to_string(),
            units: Units::Px,
            ..self.settings.clone()
        };
        Self {
            driver: self.driver,
            settings,
        }
    }

    pub fn set_color_for_root_element(&mut self, color: Rgba<u8>) {
        self.settings.report.style.root_color = color;
    }

    pub fn set_color_for_highlighted_elements(&mut self, color: Rgba<u8>) {
        self.settings.report.style.highlight_color = color;
    }

    pub fn set_lines_color(&mut self, color: Rgba<u8>) {
        self.settings.report.style.lines_color = color;
    }

    /// Offset overlay shapes by the status bar in mobile web contexts
    pub fn set_top_bar_mobile_offset(&mut self, state: bool) {
        self.settings.top_bar = state;
    }

    pub fn with_report_options(mut self, options: ReportOptions) -> Self {
        self.settings.report = options;
        self
    }

    pub fn with_alignment_checker(mut self, checker: impl AlignmentChecker + 'static) -> Self {
        self.settings.alignment = Rc::new(checker);
        self
    }

    pub fn change_metrics_units_to(mut self, units: Units) -> Self {
        self.settings.units = units;
        self
    }

    /// Write a JSON record and an annotated screenshot for failed sessions
    pub fn draw_map(mut self) -> Self {
        self.settings.draw_map = true;
        self
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Validate a single root element
    pub fn find_element(&self, element: D::Element, name: &str) -> UiValidator<'d, D> {
        let target = Target::Single {
            element,
            name: name.to_string(),
        };
        UiValidator {
            session: Session::open(self.driver, target, self.settings.clone()),
        }
    }

    /// Validate an ordered list of elements pairwise
    pub fn find_elements(&self, elements: Vec<D::Element>) -> ChunkValidator<'d, D> {
        ChunkValidator {
            session: Session::open(self.driver, Target::Chunk { elements }, self.settings.clone()),
        }
    }

    /// A validation that never selected an element fails
    pub fn validate(&self) -> bool {
        self.find_elements(Vec::new()).validate()
    }

    /// Records written so far by sessions opened from this validator
    pub fn record_files(&self) -> Vec<PathBuf> {
        self.settings.records.borrow().clone()
    }

    /// Build the HTML report from the records written so far by any
    /// validator sharing these settings.
    ///
    /// Records only exist for draw-map sessions, so with none written this
    /// does nothing.
    pub fn generate_report(&self, name: &str) -> Option<PathBuf> {
        let records = self.record_files();
        if records.is_empty() {
            debug!("No records written, skipping report");
            return None;
        }

        match HtmlReportBuilder::new(self.settings.report.clone()).build(name, &records) {
            Ok(path) => {
                info!(path = %path.display(), records = records.len(), "Generated report");
                Some(path)
            }
            Err(e) => {
                error!(error = %e, "Could not generate report");
                None
            }
        }
    }
}

/// Rules relative to one root element
pub struct UiValidator<'d, D: Driver> {
    session: Session<'d, D>,
}

impl<'d, D: Driver> UiValidator<'d, D> {
    pub fn session(&self) -> &Session<'d, D> {
        &self.session
    }

    pub fn change_metrics_units_to(mut self, units: Units) -> Self {
        self.session.set_units(units);
        self
    }

    /// Element to the left, sharing part of the root's vertical extent
    pub fn with_left_element(mut self, element: &D::Element) -> Self {
        self.session.check_adjacent(Side::Left, element);
        self
    }

    pub fn with_left_element_margin(mut self, element: &D::Element, min: i32, max: i32) -> Self {
        self.session.check_adjacent_within(Side::Left, element, min, max);
        self
    }

    pub fn with_right_element(mut self, element: &D::Element) -> Self {
        self.session.check_adjacent(Side::Right, element);
        self
    }

    pub fn with_right_element_margin(mut self, element: &D::Element, min: i32, max: i32) -> Self {
        self.session.check_adjacent_within(Side::Right, element, min, max);
        self
    }

    /// Element above, sharing part of the root's horizontal extent
    pub fn with_top_element(mut self, element: &D::Element) -> Self {
        self.session.check_adjacent(Side::Above, element);
        self
    }

    pub fn with_top_element_margin(mut self, element: &D::Element, min: i32, max: i32) -> Self {
        self.session.check_adjacent_within(Side::Above, element, min, max);
        self
    }

    pub fn with_bottom_element(mut self, element: &D::Element) -> Self {
        self.session.check_adjacent(Side::Below, element);
        self
    }

    pub fn with_bottom_element_margin(mut self, element: &D::Element, min: i32, max: i32) -> Self {
        self.session.check_adjacent_within(Side::Below, element, min, max);
        self
    }

    pub fn overlap_with(mut self, element: &D::Element, name: &str) -> Self {
        self.session.check_overlap(element, name, true);
        self
    }

    pub fn not_overlap_with(mut self, element: &D::Element, name: &str) -> Self {
        self.session.check_overlap(element, name, false);
        self
    }

    pub fn not_overlap_with_all(mut self, elements: &[D::Element]) -> Self {
        self.session.check_not_overlap_all(elements);
        self
    }

    pub fn same_offset_left_as(self, element: &D::Element, name: &str) -> Self {
        self.same_edge_as(Edge::Left, element, name)
    }

    pub fn same_offset_left_as_all(self, elements: &[D::Element]) -> Self {
        self.same_edge_as_all(Edge::Left, elements)
    }

    pub fn same_offset_right_as(self, element: &D::Element, name: &str) -> Self {
        self.same_edge_as(Edge::Right, element, name)
    }

    pub fn same_offset_right_as_all(self, elements: &[D::Element]) -> Self {
        self.same_edge_as_all(Edge::Right, elements)
    }

    pub fn same_offset_top_as(self, element: &D::Element, name: &str) -> Self {
        self.same_edge_as(Edge::Top, element, name)
    }

    pub fn same_offset_top_as_all(self, elements: &[D::Element]) -> Self {
        self.same_edge_as_all(Edge::Top, elements)
    }

    pub fn same_offset_bottom_as(self, element: &D::Element, name: &str) -> Self {
        self.same_edge_as(Edge::Bottom, element, name)
    }

    pub fn same_offset_bottom_as_all(self, elements: &[D::Element]) -> Self {
        self.same_edge_as_all(Edge::Bottom, elements)
    }

    fn same_edge_as(mut self, edge: Edge, element: &D::Element, name: &str) -> Self {
        self.session.check_same_edge(edge, element, name);
        self.session.mark_guide(edge);
        self
    }

    fn same_edge_as_all(mut self, edge: Edge, elements: &[D::Element]) -> Self {
        self.session.check_same_edge_all(edge, elements);
        self.session.mark_guide(edge);
        self
    }

    pub fn same_width_as(mut self, element: &D::Element, name: &str) -> Self {
        self.session.check_same_size(SizeKind::WidthOnly, element, name);
        self
    }

    pub fn same_width_as_all(mut self, elements: &[D::Element]) -> Self {
        self.session.check_same_size_all(SizeKind::WidthOnly, elements);
        self
    }

    pub fn same_height_as(mut self, element: &D::Element, name: &str) -> Self {
        self.session.check_same_size(SizeKind::HeightOnly, element, name);
        self
    }

    pub fn same_height_as_all(mut self, elements: &[D::Element]) -> Self {
        self.session.check_same_size_all(SizeKind::HeightOnly, elements);
        self
    }

    pub fn same_size_as(mut self, element: &D::Element, name: &str) -> Self {
        self.session.check_same_size(SizeKind::Size, element, name);
        self
    }

    pub fn same_size_as_all(mut self, elements: &[D::Element]) -> Self {
        self.session.check_same_size_all(SizeKind::Size, elements);
        self
    }

    pub fn not_same_size_as(mut self, element: &D::Element, name: &str) -> Self {
        self.session.check_not_same_size(element, name);
        self
    }

    pub fn not_same_size_as_all(mut self, elements: &[D::Element]) -> Self {
        self.session.check_not_same_size_all(elements);
        self
    }

    pub fn min_width(mut self, width: i32) -> Self {
        self.session.check_min_dimension(Dimension::Width, width);
        self
    }

    pub fn max_width(mut self, width: i32) -> Self {
        self.session.check_max_dimension(Dimension::Width, width);
        self
    }

    pub fn width_between(self, min: i32, max: i32) -> Self {
        self.min_width(min).max_width(max)
    }

    pub fn min_height(mut self, height: i32) -> Self {
        self.session.check_min_dimension(Dimension::Height, height);
        self
    }

    pub fn max_height(mut self, height: i32) -> Self {
        self.session.check_max_dimension(Dimension::Height, height);
        self
    }

    pub fn height_between(self, min: i32, max: i32) -> Self {
        self.min_height(min).max_height(max)
    }

    /// Lower bounds on the distances from the root to each page edge.
    ///
    /// A side at or below [`MIN_OFFSET`](crate::MIN_OFFSET) skips the rule.
    pub fn min_offset(mut self, top: i32, right: i32, bottom: i32, left: i32) -> Self {
        self.session.check_min_offset(top, right, bottom, left);
        self
    }

    pub fn max_offset(mut self, top: i32, right: i32, bottom: i32, left: i32) -> Self {
        self.session.check_max_offset(top, right, bottom, left);
        self
    }

    /// Computed value of `property` contains every value; hex colours are
    /// compared in `rgb()` form
    pub fn with_css_value(mut self, property: &str, values: &[&str]) -> Self {
        self.session.check_css(property, values, true);
        self
    }

    pub fn without_css_value(mut self, property: &str, values: &[&str]) -> Self {
        self.session.check_css(property, values, false);
        self
    }

    pub fn equal_left_right_offset(mut self) -> Self {
        self.session.check_equal_left_right();
        self
    }

    pub fn equal_top_bottom_offset(mut self) -> Self {
        self.session.check_equal_top_bottom();
        self
    }

    pub fn inside_of(mut self, container: &D::Element, name: &str) -> Self {
        self.session.check_inside(container, name);
        self
    }

    pub fn inside_of_with_padding(
        mut self,
        container: &D::Element,
        name: &str,
        padding: Padding,
    ) -> Self {
        self.session.check_inside_with_padding(container, name, padding);
        self
    }

    pub fn validate(self) -> bool {
        self.finish().passed
    }

    pub fn finish(self) -> ValidationOutcome {
        self.session.conclude()
    }
}

/// Rules over an ordered list of elements
pub struct ChunkValidator<'d, D: Driver> {
    session: Session<'d, D>,
}

impl<'d, D: Driver> ChunkValidator<'d, D> {
    pub fn session(&self) -> &Session<'d, D> {
        &self.session
    }

    pub fn change_metrics_units_to(mut self, units: Units) -> Self {
        self.session.set_units(units);
        self
    }

    /// Rows of `columns` elements, one short row allowed
    pub fn aligned_as_grid(self, columns: usize) -> Self {
        self.aligned_as_grid_with_rows(columns, 0)
    }

    pub fn aligned_as_grid_with_rows(mut self, columns: usize, rows: usize) -> Self {
        let elements = self.session.chunk_elements();
        if let Some(rects) = self.session.rects_of(&elements) {
            for problem in crate::grid::check_grid(&rects, columns, rows) {
                self.session.log_mut().push(problem);
            }
        }
        self
    }

    pub fn are_not_overlapped_with_each_other(mut self) -> Self {
        self.session.check_chunk_not_overlapped();
        self
    }

    pub fn with_same_size(mut self) -> Self {
        self.session.check_chunk_size(SizeKind::Size, true);
        self
    }

    pub fn with_same_width(mut self) -> Self {
        self.session.check_chunk_size(SizeKind::WidthOnly, true);
        self
    }

    pub fn with_same_height(mut self) -> Self {
        self.session.check_chunk_size(SizeKind::HeightOnly, true);
        self
    }

    pub fn with_not_same_size(mut self) -> Self {
        self.session.check_chunk_size(SizeKind::Size, false);
        self
    }

    pub fn with_not_same_width(mut self) -> Self {
        self.session.check_chunk_size(SizeKind::WidthOnly, false);
        self
    }

    pub fn with_not_same_height(mut self) -> Self {
        self.session.check_chunk_size(SizeKind::HeightOnly, false);
        self
    }

    pub fn same_left_offset(self) -> Self {
        self.same_edge(Edge::Left)
    }

    pub fn same_right_offset(self) -> Self {
        self.same_edge(Edge::Right)
    }

    pub fn same_top_offset(self) -> Self {
        self.same_edge(Edge::Top)
    }

    pub fn same_bottom_offset(self) -> Self {
        self.same_edge(Edge::Bottom)
    }

    fn same_edge(mut self, edge: Edge) -> Self {
        self.session.check_chunk_same_edge(edge);
        self
    }

    pub fn equal_left_right_offset(mut self) -> Self {
        self.session.check_chunk_equal_left_right();
        self
    }

    pub fn equal_top_bottom_offset(mut self) -> Self {
        self.session.check_chunk_equal_top_bottom();
        self
    }

    pub fn inside_of(mut self, container: &D::Element, name: &str) -> Self {
        self.session.check_inside(container, name);
        self
    }

    pub fn validate(self) -> bool {
        self.finish().passed
    }

    pub fn finish(self) -> ValidationOutcome {
        self.session.conclude()
    }
}
