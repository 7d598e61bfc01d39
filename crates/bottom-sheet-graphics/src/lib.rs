//! Pure geometry for the bottom sheet drawer
//!
//! Points, sizes and rectangles in logical pixels with Y growing downward,
//! plus the rounded-corner shape used for the sheet background.

mod geometry;
mod path;

pub use geometry::*;
pub use path::*;
