//! Where the renderer should place the sheet for a given offset.

use bottom_sheet_graphics::{CornerRadii, Path, Rect, RoundedCornerShape, Size};

use crate::config::SheetConfig;

/// Height of the touch-sensitive band along the top of the sheet.
pub const DRAG_SURFACE_HEIGHT: f32 = 50.0;
/// Size of the capsule drawn as the drag affordance.
pub const DRAG_HANDLE_SIZE: Size = Size::new(80.0, 5.0);
/// Radius of the sheet's two top corners.
pub const SHEET_CORNER_RADIUS: f32 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SheetLayout {
    /// Container size after applying the sheet's minimum height.
    pub container: Size,
    /// Full-size sheet panel; its top edge is at `height - shift - offset`.
    pub panel: Rect,
    /// Band that starts a drag when pressed.
    pub drag_surface: Rect,
    /// Capsule to draw at the top of the sheet, if the handle is shown.
    pub drag_handle: Option<Rect>,
    pub corners: CornerRadii,
}

impl SheetLayout {
    pub fn compute(config: &SheetConfig, container: Size, offset: f32) -> Self {
        let container = Size::new(container.width, container.height.max(config.shift()));
        let top = container.height - config.shift() - offset;

        let panel = Rect::new(0.0, top, container.width, container.height);
        let drag_surface = Rect::new(0.0, top, container.width, DRAG_SURFACE_HEIGHT);
        let drag_handle = config.show_drag_handle().then(|| {
            Rect::new(
                (container.width - DRAG_HANDLE_SIZE.width) / 2.0,
                top,
                DRAG_HANDLE_SIZE.width,
                DRAG_HANDLE_SIZE.height,
            )
        });
        let corners = Self::shape().resolve(container.width, container.height);

        Self {
            container,
            panel,
            drag_surface,
            drag_handle,
            corners,
        }
    }

    pub fn shape() -> RoundedCornerShape {
        RoundedCornerShape::with_radii(CornerRadii::top(SHEET_CORNER_RADIUS))
    }

    /// Background outline in panel-local coordinates.
    pub fn background_outline(&self) -> Path {
        Self::shape().outline(self.panel.size())
    }

    /// Part of the panel that is on screen.
    pub fn visible_height(&self) -> f32 {
        (self.container.height - self.panel.y).max(0.0)
    }
}
