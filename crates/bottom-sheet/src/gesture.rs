//! Pointer events to controller calls.
//!
//! The sheet recognises a single drag at a time with no touch slop: the
//! press itself already moves the sheet under the pointer. Positions are in
//! container coordinates with Y growing downward.

use bottom_sheet_graphics::{Point, Size};

use crate::controller::SheetPositionController;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    pointer: PointerId,
    start: Point,
}

/// Drag recogniser for the sheet's drag surface.
#[derive(Default, Debug, Clone)]
pub struct SheetDragGesture {
    active: Option<ActiveDrag>,
}

impl SheetDragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start point of the drag in progress.
    pub fn start(&self) -> Option<Point> {
        self.active.map(|drag| drag.start)
    }

    /// Feed one pointer event. Returns `true` if the event belonged to the
    /// sheet's drag and the host should treat it as consumed.
    pub fn handle(
        &mut self,
        sheet: &mut SheetPositionController,
        event: &PointerEvent,
        container: Size,
    ) -> bool {
        let height = container.height;
        let position = event.position;

        match event.kind {
            PointerEventKind::Down => {
                // A new press means the release of the tracked one was lost.
                if let Some(stale) = self.active.take() {
                    log::debug!(
                        "pointer {} pressed while pointer {} was dragging, dropping stale drag at offset {}",
                        event.id,
                        stale.pointer,
                        sheet.offset()
                    );
                }
                let surface = sheet.layout(container).drag_surface;
                if !surface.contains(position.x, position.y) {
                    return false;
                }
                self.active = Some(ActiveDrag {
                    pointer: event.id,
                    start: position,
                });
                sheet.on_drag_move(position.y, height);
                true
            }
            PointerEventKind::Move => {
                if !self.owns(event) {
                    return false;
                }
                sheet.on_drag_move(position.y, height);
                true
            }
            PointerEventKind::Up => {
                if !self.owns(event) {
                    return false;
                }
                let Some(drag) = self.active.take() else {
                    return false;
                };
                sheet.on_drag_end(drag.start.y, position.y, height);
                true
            }
            PointerEventKind::Cancel => {
                if !self.owns(event) {
                    return false;
                }
                self.active = None;
                log::debug!("drag cancelled, offset left at {}", sheet.offset());
                true
            }
        }
    }

    fn owns(&self, event: &PointerEvent) -> bool {
        self.active.is_some_and(|drag| drag.pointer == event.id)
    }
}
