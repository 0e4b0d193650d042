//! Dirty region tracking for redraw scheduling.
//!
//! Collects axis-aligned rectangles that need repainting between frames.

use super::stroke::Stroke;
use crate::util::Rect;

/// Past this many pending rectangles the tracker falls back to full damage.
const MAX_REGIONS: usize = 64;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    ///
    /// Collapses to full damage once `MAX_REGIONS` rectangles are pending, so a
    /// host that never drains the tracker does not grow it without bound.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        if self.regions.len() >= MAX_REGIONS {
            self.mark_full();
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the bounding box for the given stroke, or full damage if none is available.
    pub fn mark_stroke(&mut self, stroke: &Stroke) {
        match stroke.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Whether anything has been marked since the last drain.
    pub fn is_dirty(&self) -> bool {
        self.force_full || !self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            if width > 0 && height > 0 {
                if let Some(full) = Rect::new(0, 0, width, height) {
                    return vec![full];
                }
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{PathProperties, Point, VectorPath};

    fn short_stroke(x: f64) -> Stroke {
        let mut path = VectorPath::new();
        path.move_to(Point::new(x, x));
        path.line_to(Point::new(x + 10.0, x + 10.0));
        Stroke::new(path, PathProperties::default())
    }

    #[test]
    fn mark_stroke_records_rectangles() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_stroke(&short_stroke(0.0));
        assert!(tracker.is_dirty());

        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects.len(), 1);
        assert!(rects[0].width > 0);
        assert!(rects[0].height > 0);
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_stroke(&short_stroke(5.0));
        tracker.mark_full();
        tracker.mark_stroke(&short_stroke(20.0));

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(0, 0, 200, 100).unwrap());
    }

    #[test]
    fn undrained_regions_collapse_to_full_damage() {
        let mut tracker = DirtyTracker::new();
        for i in 0..(MAX_REGIONS + 10) {
            tracker.mark_stroke(&short_stroke(i as f64));
        }
        assert!(tracker.regions.len() <= MAX_REGIONS);

        let rects = tracker.take_regions(50, 40);
        assert_eq!(rects, vec![Rect::new(0, 0, 50, 40).unwrap()]);
    }

    #[test]
    fn empty_stroke_forces_full_damage() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_stroke(&Stroke::new(VectorPath::new(), PathProperties::default()));
        assert_eq!(tracker.take_regions(10, 10).len(), 1);
    }
}
