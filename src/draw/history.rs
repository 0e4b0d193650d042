//! Ordered stroke history with linear undo/redo.

use super::stroke::Stroke;

/// Committed strokes plus the redo buffer.
///
/// `committed` is in draw order (first = bottom, last = top). `undone` is a stack
/// whose tail is the most recently undone stroke. A stroke lives in exactly one
/// of the two sequences and moves between them by value.
#[derive(Debug, Default)]
pub struct StrokeHistory {
    committed: Vec<Stroke>,
    undone: Vec<Stroke>,
}

impl StrokeHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stroke and invalidates the redo buffer.
    pub fn commit(&mut self, stroke: Stroke) {
        self.committed.push(stroke);
        if !self.undone.is_empty() {
            log::debug!("Dropping {} redo entries after new stroke", self.undone.len());
            self.undone.clear();
        }
    }

    /// Moves the newest committed stroke onto the redo stack.
    ///
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone stroke back onto the committed list.
    ///
    /// Returns `false` when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Visible strokes in draw order.
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Redo buffer, most recent undo last.
    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Translates the committed stroke at `index` in place.
    ///
    /// Returns `false` if the index is out of range.
    pub fn translate_committed(&mut self, index: usize, dx: f64, dy: f64) -> bool {
        match self.committed.get_mut(index) {
            Some(stroke) => {
                stroke.path.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Translates every committed stroke; the redo buffer is left untouched.
    pub fn translate_all(&mut self, dx: f64, dy: f64) {
        for index in 0..self.committed.len() {
            self.translate_committed(index, dx, dy);
        }
    }
}
