//! Pointer event types delivered by the host gesture layer.

use crate::draw::Point;

/// Phase of a single-pointer drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Pointer pressed / drag started
    Start,
    /// Pointer moved while pressed
    Move,
    /// Pointer released
    End,
    /// Host aborted the gesture (handled like `End` at the last known position)
    Cancel,
}

/// A pointer event with its surface position.
///
/// Handlers call [`PointerEvent::consume`] once they have claimed the event so
/// the host gesture layer does not pass it on to anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    consumed: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            consumed: false,
        }
    }

    pub fn start(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Start, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    pub fn end(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::End, x, y)
    }

    pub fn cancel(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Cancel, x, y)
    }

    /// Marks the event as handled.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}
