//! Draggable bottom sheet drawer
//!
//! A panel anchored to the bottom of a container that the user drags between
//! three snap levels. [`SheetPositionController`] owns the state and the math;
//! [`SheetDragGesture`] and [`SizeObserver`] adapt raw pointer and size events
//! from the host, and [`SheetLayout`] tells the renderer where to draw.
//!
//! ```
//! use bottom_sheet::prelude::*;
//!
//! let mut sheet = SheetPositionController::new(SheetConfig::default()).without_animation();
//! sheet.on_drag_move(600.0, 800.0);
//! sheet.on_drag_end(700.0, 600.0, 800.0);
//! assert!(sheet.position().is_middle());
//! assert_eq!(sheet.offset(), 356.0);
//! ```

mod config;
mod controller;
mod gesture;
mod layout;
mod listeners;
mod measure;
mod position;

pub use config::*;
pub use controller::*;
pub use gesture::*;
pub use layout::*;
pub use listeners::*;
pub use measure::*;
pub use position::*;

pub use bottom_sheet_animation::{AnimationSpec, Easing};
pub use bottom_sheet_graphics::{CornerRadii, Path, PathCommand, Point, Rect, Size};

pub mod prelude {
    pub use crate::config::SheetConfig;
    pub use crate::controller::SheetPositionController;
    pub use crate::gesture::{PointerEvent, PointerEventKind, SheetDragGesture};
    pub use crate::layout::SheetLayout;
    pub use crate::listeners::ListenerId;
    pub use crate::measure::SizeObserver;
    pub use crate::position::{SheetLevel, SheetPosition};
    pub use bottom_sheet_graphics::{Point, Rect, Size};
}
