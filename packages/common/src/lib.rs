//! # Automotion Common
//!
//! Shared vocabulary for the layout assertion engine: element rectangles,
//! viewport snapshots, constraint units, validation errors and the
//! collaborator traits a browser or device adapter implements.

pub mod driver;
pub mod error;
pub mod mock;
pub mod rect;
pub mod result;
pub mod units;
pub mod validation;
pub mod viewport;

pub use driver::*;
pub use error::*;
pub use mock::*;
pub use rect::*;
pub use result::*;
pub use units::*;
pub use validation::*;
pub use viewport::*;
