//! Vector path geometry for freehand strokes.

use crate::util::Rect;
use serde::{Deserialize, Serialize};

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A single drawing command within a [`VectorPath`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Begin a new subpath at the point
    MoveTo(Point),
    /// Quadratic Bézier from the current point through `ctrl` to `to`
    QuadTo { ctrl: Point, to: Point },
    /// Straight segment from the current point
    LineTo(Point),
}

impl PathCommand {
    /// All points referenced by this command, control points included.
    fn points(&self) -> impl Iterator<Item = Point> {
        let (first, second) = match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => (p, None),
            PathCommand::QuadTo { ctrl, to } => (ctrl, Some(to)),
        };
        std::iter::once(first).chain(second)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p = p.offset(dx, dy),
            PathCommand::QuadTo { ctrl, to } => {
                *ctrl = ctrl.offset(dx, dy);
                *to = to.offset(dx, dy);
            }
        }
    }
}

/// Ordered sequence of path commands, mutable in place.
///
/// Committed paths are only changed by uniform translation (touch-mode panning);
/// their shape never changes after commit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorPath {
    commands: Vec<PathCommand>,
}

impl VectorPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Shifts every command by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for command in &mut self.commands {
            command.translate(dx, dy);
        }
    }

    /// Returns the axis-aligned bounds of the path, expanded to cover `stroke_width`.
    ///
    /// Quadratic segments lie inside the hull of their control points, so the
    /// control points give a conservative box. Returns `None` for an empty path
    /// or when the box does not fit in `i32` pixel coordinates.
    pub fn bounding_box(&self, stroke_width: f64) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(PathCommand::points);
        let first = points.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        // Square caps project past the endpoint diagonally.
        let padding = (stroke_width / 2.0 * std::f64::consts::SQRT_2).ceil().max(1.0);
        let to_pixel = |v: f64| v.clamp(i32::MIN as f64, i32::MAX as f64) as i32;
        Rect::from_min_max(
            to_pixel((min_x - padding).floor()),
            to_pixel((min_y - padding).floor()),
            to_pixel((max_x + padding).ceil()),
            to_pixel((max_y + padding).ceil()),
        )
    }
}
