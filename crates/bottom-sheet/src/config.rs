//! Sheet configuration.
//!
//! Values are in logical pixels. Out-of-range input is clamped to the
//! nearest valid value rather than rejected.

/// Visible height of the collapsed sheet.
pub const DEFAULT_SHIFT: f32 = 88.0;
/// Smallest accepted shift.
pub const MIN_SHIFT: f32 = 25.0;
/// Gap left above the fully expanded sheet.
pub const DEFAULT_TOP_INDENTATION: f32 = 50.0;
pub const DEFAULT_DRAGGER_HEIGHT: f32 = 50.0;
/// Largest accepted dragger height.
pub const MAX_DRAGGER_HEIGHT: f32 = 25.0;
/// Drags shorter than this snap back instead of changing level.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    shift: f32,
    top_indentation: f32,
    dragger_height: f32,
    drag_threshold_to_act: f32,
    animate: bool,
    show_drag_handle: bool,
}

impl SheetConfig {
    pub fn new(
        shift: f32,
        top_indentation: f32,
        dragger_height: f32,
        drag_threshold_to_act: f32,
    ) -> Self {
        Self {
            shift: shift.max(MIN_SHIFT),
            top_indentation: top_indentation.max(0.0),
            dragger_height: dragger_height.min(MAX_DRAGGER_HEIGHT),
            drag_threshold_to_act: drag_threshold_to_act.max(0.0),
            animate: true,
            show_drag_handle: true,
        }
    }

    /// Apply level changes immediately instead of easing into them.
    pub fn without_animation(mut self) -> Self {
        self.animate = false;
        self
    }

    pub fn hide_drag_handle(mut self) -> Self {
        self.show_drag_handle = false;
        self
    }

    pub fn shift(&self) -> f32 {
        self.shift
    }

    pub fn top_indentation(&self) -> f32 {
        self.top_indentation
    }

    pub fn dragger_height(&self) -> f32 {
        self.dragger_height
    }

    pub fn drag_threshold_to_act(&self) -> f32 {
        self.drag_threshold_to_act
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn show_drag_handle(&self) -> bool {
        self.show_drag_handle
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SHIFT,
            DEFAULT_TOP_INDENTATION,
            DEFAULT_DRAGGER_HEIGHT,
            DEFAULT_DRAG_THRESHOLD,
        )
    }
}
