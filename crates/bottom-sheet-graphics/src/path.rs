//! Minimal path description handed to the renderer.

use crate::geometry::Point;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Clockwise arc (Y-down) around `center`.
    Arc {
        center: Point,
        radius: f32,
        start_degrees: f32,
        end_degrees: f32,
    },
    Close,
}

/// Sequence of path commands. A rounded box needs exactly ten, so the
/// common case never allocates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 10]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}
