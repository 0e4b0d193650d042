//! Incremental construction of smoothed freehand paths.

use super::path::{Point, VectorPath};

/// Builds the in-progress stroke path from sampled pointer positions.
///
/// Each sample adds a quadratic segment that uses the previous sample as its
/// control point and ends at the midpoint between the previous and current
/// samples, so the raw sample polygon never shows corners.
#[derive(Debug, Default)]
pub struct PathBuilder {
    path: VectorPath,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh path at `at`, discarding anything unfinished.
    pub fn begin(&mut self, at: Point) {
        self.path = VectorPath::new();
        self.path.move_to(at);
    }

    /// Appends a smoothed segment for a move from `previous` to `current`.
    pub fn extend(&mut self, previous: Point, current: Point) {
        self.path.quad_to(previous, previous.midpoint(current));
    }

    /// Closes the stroke with a line to `at` and hands the finished path out.
    ///
    /// The builder is left empty, ready for the next stroke.
    pub fn finish(&mut self, at: Point) -> VectorPath {
        self.path.line_to(at);
        std::mem::take(&mut self.path)
    }

    /// Drops the in-progress path without producing a stroke.
    pub fn abandon(&mut self) {
        self.path = VectorPath::new();
    }

    /// Whether a path has been started and not yet finished or abandoned.
    pub fn is_started(&self) -> bool {
        !self.path.is_empty()
    }

    /// The in-progress path.
    pub fn path(&self) -> &VectorPath {
        &self.path
    }

    /// Shifts the in-progress path (touch-mode panning).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.path.translate(dx, dy);
    }
}
