//! The rule family.
//!
//! Each rule measures one or two rectangles, derives a scalar (an offset, a
//! margin, a dimension) and appends one error per mismatch. Rules never
//! return early with an error and never remove earlier failures. List forms
//! compare consecutive members only.

mod container;
mod css;
mod margin;
mod offset;
mod overlap;
mod size;

pub use container::Padding;
pub use css::css_color;
pub use margin::Side;
pub use offset::MIN_OFFSET;
pub use size::{Dimension, SizeKind};
