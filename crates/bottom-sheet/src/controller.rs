//! Drag-to-position state machine.
//!
//! The controller turns pointer-drag telemetry and container resizes into a
//! continuous `offset` (0 = collapsed) and a discrete [`SheetPosition`].
//! All methods run synchronously on the UI thread; a settle animation is
//! only a target value that the host advances with
//! [`advance_frame`](SheetPositionController::advance_frame).

use bottom_sheet_animation::{Animatable, AnimationSpec, Easing};
use bottom_sheet_graphics::Size;

use crate::config::SheetConfig;
use crate::layout::SheetLayout;
use crate::listeners::{ListenerId, PositionListeners};
use crate::position::SheetPosition;

/// Tween used when the sheet settles on a level.
pub const SETTLE_ANIMATION: AnimationSpec = AnimationSpec::tween(250, Easing::EaseInOut);

#[derive(Debug)]
pub struct SheetPositionController {
    config: SheetConfig,
    offset: Animatable<f32>,
    position: SheetPosition,
    listeners: PositionListeners,
    warned_inverted_bounds: bool,
}

/// `min(max(value, lower), upper)`; with `lower > upper` the result is
/// `upper`.
fn clamped(value: f32, lower: f32, upper: f32) -> f32 {
    value.max(lower).min(upper)
}

impl SheetPositionController {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            offset: Animatable::new(0.0),
            position: SheetPosition::Down(config.shift()),
            config,
            listeners: PositionListeners::new(),
            warned_inverted_bounds: false,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Same controller with settle animations turned off.
    pub fn without_animation(mut self) -> Self {
        self.config = self.config.without_animation();
        self
    }

    /// Same controller with the drag handle affordance hidden.
    pub fn hide_drag_handle(mut self) -> Self {
        self.config = self.config.hide_drag_handle();
        self
    }

    pub fn position(&self) -> SheetPosition {
        self.position
    }

    /// Offset the sheet is at, or is settling towards.
    pub fn offset(&self) -> f32 {
        self.offset.target()
    }

    /// Offset to draw this frame. Differs from [`offset`](Self::offset) only
    /// while a settle animation runs.
    pub fn rendered_offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn is_settling(&self) -> bool {
        self.offset.is_running()
    }

    /// Advance the settle animation to the host frame time. Returns `true`
    /// while more frames are needed.
    pub fn advance_frame(&mut self, frame_time_nanos: u64) -> bool {
        self.offset.tick(frame_time_nanos)
    }

    /// Register a callback fired whenever a different position is assigned.
    pub fn on_position_changed(
        &mut self,
        listener: impl FnMut(SheetPosition) + 'static,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_position_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn layout(&self, container: Size) -> SheetLayout {
        SheetLayout::compute(&self.config, container, self.rendered_offset())
    }

    /// Draggable distance for a container of `height`. The sheet never gets
    /// shorter than its shift, so this is never negative.
    pub fn max_travel(&self, height: f32) -> f32 {
        height.max(self.config.shift()) - self.config.shift()
    }

    /// Live tracking while the pointer moves; the position is left alone.
    pub fn on_drag_move(&mut self, pointer_y: f32, container_height: f32) {
        let max_travel = self.max_travel(container_height);
        let lower = self.config.top_indentation();
        if lower > max_travel {
            self.warn_inverted_bounds(max_travel);
        }
        let offset = max_travel - clamped(pointer_y, lower, max_travel);
        log::trace!("drag move y={pointer_y} offset={offset}");
        self.offset.snap_to(offset);
    }

    /// Finish a drag that started at `start_y` and was released at `end_y`.
    ///
    /// Drags shorter than the threshold snap back to the current level;
    /// longer ones move one level in the drag direction.
    pub fn on_drag_end(&mut self, start_y: f32, end_y: f32, container_height: f32) {
        let travel = start_y - end_y;
        let up = travel > 0.0;
        let delta = travel.abs();

        let limit = if delta < self.config.drag_threshold_to_act() {
            log::debug!(
                "drag of {delta} below threshold {}, restoring {:?}",
                self.config.drag_threshold_to_act(),
                self.position
            );
            self.resolve_limit(container_height)
        } else {
            let (limit, next) = self.move_next(container_height, up);
            log::debug!(
                "drag {} by {delta}: {:?} -> {next:?}",
                if up { "up" } else { "down" },
                self.position
            );
            self.assign_position(next);
            limit
        };

        self.settle_to(limit);
    }

    /// Re-fit the current level to a new container height.
    pub fn on_resize(&mut self, container_height: f32) {
        let limit = self.resolve_limit(container_height);
        if limit != self.offset() {
            log::debug!(
                "container height {container_height}: {:?} offset {} -> {limit}",
                self.position.level(),
                self.offset()
            );
            self.settle_to(limit);
            self.assign_position(self.position.update_height(limit + self.config.shift()));
        }
    }

    /// Offset that the current level maps to at `container_height`.
    pub fn resolve_limit(&self, container_height: f32) -> f32 {
        let max_travel = self.max_travel(container_height);
        match self.position {
            SheetPosition::Up(_) => self.up_limit(max_travel),
            SheetPosition::Middle(_) => max_travel / 2.0,
            SheetPosition::Down(_) => 0.0,
        }
    }

    /// One step from the current offset in the drag direction.
    ///
    /// Which neighbour is one step away depends on whether the offset is
    /// already past the halfway point, not on the current level.
    pub fn move_next(&self, container_height: f32, up: bool) -> (f32, SheetPosition) {
        let shift = self.config.shift();
        let max_travel = self.max_travel(container_height);
        let half = max_travel / 2.0;
        let past_half = self.offset() > half;

        match (up, past_half) {
            (true, true) => {
                let limit = self.up_limit(max_travel);
                (limit, SheetPosition::Up(limit + shift))
            }
            (true, false) | (false, true) => (half, SheetPosition::Middle(half + shift)),
            (false, false) => (0.0, SheetPosition::Down(shift)),
        }
    }

    fn up_limit(&self, max_travel: f32) -> f32 {
        (max_travel - self.config.top_indentation()).max(0.0)
    }

    fn settle_to(&mut self, limit: f32) {
        if self.config.animate() {
            self.offset.animate_to(limit, SETTLE_ANIMATION);
        } else {
            self.offset.snap_to(limit);
        }
    }

    fn assign_position(&mut self, next: SheetPosition) {
        if next == self.position {
            return;
        }
        self.position = next;
        self.listeners.notify(next);
    }

    fn warn_inverted_bounds(&mut self, max_travel: f32) {
        if self.warned_inverted_bounds {
            return;
        }
        self.warned_inverted_bounds = true;
        log::warn!(
            "top indentation {} exceeds draggable distance {max_travel}; sheet stays collapsed",
            self.config.top_indentation()
        );
    }
}

impl Default for SheetPositionController {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
