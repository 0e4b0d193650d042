//! Pointer phase tracking.

use super::events::{PointerEvent, PointerEventKind};
use crate::draw::Point;

/// Phase of the pointer state machine.
///
/// Transitions run `Idle → Down → Move* → Up → Idle`; `Up` is only observable
/// while the release is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerPhase {
    #[default]
    Idle,
    Down,
    Move,
    Up,
}

/// Pointer phase plus the current and previous sampled positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub phase: PointerPhase,
    pub current: Option<Point>,
    pub previous: Option<Point>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an event and returns the phase it produced.
    ///
    /// Events are not validated: out-of-order events simply overwrite the
    /// position (last write wins). `End` and `Cancel` both yield `Up`; a cancel
    /// keeps the last known position instead of taking the event's.
    pub fn apply(&mut self, event: &PointerEvent) -> PointerPhase {
        match event.kind {
            PointerEventKind::Start => {
                self.phase = PointerPhase::Down;
                self.current = Some(event.position);
            }
            PointerEventKind::Move => {
                self.phase = PointerPhase::Move;
                self.current = Some(event.position);
            }
            PointerEventKind::End => {
                self.phase = PointerPhase::Up;
                self.current = Some(event.position);
            }
            PointerEventKind::Cancel => {
                self.phase = PointerPhase::Up;
                if self.current.is_none() {
                    self.current = Some(event.position);
                }
            }
        }
        self.phase
    }

    /// Records the current position as the previous sample.
    pub fn advance(&mut self) {
        self.previous = self.current;
    }

    /// Returns to `Idle` with both positions unset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        self.phase == PointerPhase::Idle
    }
}
