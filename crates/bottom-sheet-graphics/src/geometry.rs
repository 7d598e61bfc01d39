//! Geometric primitives: Point, Size, Rect, corner radii

use crate::path::{Path, PathCommand};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Only the two top corners rounded, the shape of a sheet attached to
    /// the bottom edge.
    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            ..Self::default()
        }
    }
}

/// Shape with an individual radius per corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedCornerShape {
    radii: CornerRadii,
}

impl RoundedCornerShape {
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            radii: CornerRadii {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            },
        }
    }

    pub fn with_radii(radii: CornerRadii) -> Self {
        Self { radii }
    }

    /// Radii that actually fit a box of the given size: no radius may exceed
    /// half of either side.
    pub fn resolve(&self, width: f32, height: f32) -> CornerRadii {
        let mut resolved = self.radii;
        let max_width = (width / 2.0).max(0.0);
        let max_height = (height / 2.0).max(0.0);
        resolved.top_left = resolved.top_left.clamp(0.0, max_width).min(max_height);
        resolved.top_right = resolved.top_right.clamp(0.0, max_width).min(max_height);
        resolved.bottom_right = resolved.bottom_right.clamp(0.0, max_width).min(max_height);
        resolved.bottom_left = resolved.bottom_left.clamp(0.0, max_width).min(max_height);
        resolved
    }

    /// Builds the closed outline of the shape for a box of `size`.
    ///
    /// The path starts at the middle of the top edge and walks clockwise
    /// (in Y-down coordinates), one arc per corner. Angles are in degrees
    /// with 0° pointing along +X and 90° along +Y.
    pub fn outline(&self, size: Size) -> Path {
        let w = size.width;
        let h = size.height;
        let r = self.resolve(w, h);

        let mut path = Path::new();
        path.push(PathCommand::MoveTo(Point::new(w / 2.0, 0.0)));

        path.push(PathCommand::LineTo(Point::new(w - r.top_right, 0.0)));
        path.push(PathCommand::Arc {
            center: Point::new(w - r.top_right, r.top_right),
            radius: r.top_right,
            start_degrees: -90.0,
            end_degrees: 0.0,
        });

        path.push(PathCommand::LineTo(Point::new(w, h - r.bottom_right)));
        path.push(PathCommand::Arc {
            center: Point::new(w - r.bottom_right, h - r.bottom_right),
            radius: r.bottom_right,
            start_degrees: 0.0,
            end_degrees: 90.0,
        });

        path.push(PathCommand::LineTo(Point::new(r.bottom_left, h)));
        path.push(PathCommand::Arc {
            center: Point::new(r.bottom_left, h - r.bottom_left),
            radius: r.bottom_left,
            start_degrees: 90.0,
            end_degrees: 180.0,
        });

        path.push(PathCommand::LineTo(Point::new(0.0, r.top_left)));
        path.push(PathCommand::Arc {
            center: Point::new(r.top_left, r.top_left),
            radius: r.top_left,
            start_degrees: 180.0,
            end_degrees: 270.0,
        });

        path.push(PathCommand::Close);
        path
    }
}
