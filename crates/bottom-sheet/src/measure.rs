//! Container size tracking.

use bottom_sheet_graphics::Size;

use crate::controller::SheetPositionController;

/// Forwards container measurements to the controller, skipping reports that
/// do not change the height.
#[derive(Default, Debug, Clone, Copy)]
pub struct SizeObserver {
    last: Option<Size>,
}

impl SizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_size(&self) -> Option<Size> {
        self.last
    }

    /// Record a measurement. Returns `true` if the controller was asked to
    /// re-fit the sheet.
    pub fn observe(&mut self, sheet: &mut SheetPositionController, size: Size) -> bool {
        let previous = self.last.replace(size);
        if previous.is_some_and(|previous| previous.height == size.height) {
            return false;
        }
        log::debug!("container measured at {}x{}", size.width, size.height);
        sheet.on_resize(size.height);
        true
    }
}
