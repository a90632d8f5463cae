//! Conversion of caller-supplied constraint values into pixels

use crate::viewport::ViewportMetrics;
use serde::{Deserialize, Serialize};

/// How constraint literals (margins, sizes, offsets) are interpreted.
///
/// Measured geometry is always in pixels; only the thresholds a caller
/// passes in are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[default]
    Px,
    Percent,
}

/// Axis a constraint applies to; percentages are taken of the viewport
/// width for horizontal values and of its height for vertical ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Convert a constraint value into pixels against the current viewport
pub fn to_pixels(value: i32, axis: Axis, viewport: &ViewportMetrics, units: Units) -> i32 {
    match units {
        Units::Px => value,
        Units::Percent => {
            let extent = match axis {
                Axis::Horizontal => viewport.page_width,
                Axis::Vertical => viewport.page_height,
            };
            (i64::from(value) * i64::from(extent)).div_euclid(100) as i32
        }
    }
}
