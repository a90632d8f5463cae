//! # Automotion Validator
//!
//! Fluent assertions over the geometry of rendered UI elements. A session
//! reads rectangles through the collaborator traits in `automotion_common`,
//! checks offsets, margins, sizes, overlap, containment and grid shape, and
//! collects every mismatch instead of stopping at the first.
//!
//! ## Usage
//!
//! ```rust
//! use automotion_common::{MockPage, Rect, ViewportMetrics};
//! use automotion_validator::ResponsiveValidator;
//!
//! let page = MockPage::new(ViewportMetrics::desktop(1280, 800));
//! let header = page.add_element("header", Rect::new(0, 0, 1280, 80));
//! let content = page.add_element("content", Rect::new(0, 100, 1280, 600));
//!
//! let passed = ResponsiveValidator::new(&page)
//!     .init_with_scenario("Header layout")
//!     .find_element(header, "Header")
//!     .same_offset_left_as(&content, "Content")
//!     .with_bottom_element_margin(&content, 10, 30)
//!     .min_height(60)
//!     .validate();
//!
//! assert!(passed);
//! ```

mod alignment;
mod builder;
mod compare;
mod grid;
mod log;
mod report;
mod rules;
mod session;
mod transform;

#[cfg(test)]
mod testing;

pub use alignment::{AlignmentChecker, ProjectionAlignment};
pub use builder::{ChunkValidator, ResponsiveValidator, UiValidator};
pub use compare::{
    bottom_offset, contains, equal_bottom, equal_edge, equal_left, equal_right, equal_top,
    has_equal_left_right, has_equal_top_bottom, overlaps, right_offset, Edge,
};
pub use grid::{check_grid, cluster_rows};
pub use log::ErrorLog;
pub use report::{build_overlay, ValidationOutcome, NO_ROOT_MESSAGE};
pub use rules::{css_color, Dimension, Padding, Side, SizeKind, MIN_OFFSET};
pub use session::{
    DrawHints, Session, SessionSettings, Target, DEFAULT_ROOT_NAME, DEFAULT_SCENARIO,
};
pub use transform::{CoordinateTransformer, IOS_RETINA_DEVICES, STATUS_BAR_OFFSET};
