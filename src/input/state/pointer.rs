use crate::draw::{Point, Stroke};
use crate::input::events::PointerEvent;
use crate::input::pointer::PointerPhase;

use super::InputState;

impl InputState {
    /// Processes one pointer event from the host gesture layer.
    ///
    /// The event is always marked consumed, including events that end up being
    /// ignored (e.g. a release without a press).
    ///
    /// # Behavior
    /// - Start: begins a new stroke at the pointer (Draw/Erase modes)
    /// - Move: extends the stroke with a smoothed segment, or pans in Touch mode
    /// - End/Cancel: closes and commits the stroke, then returns to Idle
    pub fn on_pointer_event(&mut self, event: &mut PointerEvent) {
        let last_raw = self.pointer.current;

        match self.pointer.apply(event) {
            PointerPhase::Down => self.on_pointer_down(),
            PointerPhase::Move => self.on_pointer_move(last_raw),
            PointerPhase::Up => self.on_pointer_up(),
            PointerPhase::Idle => {}
        }

        event.consume();
    }

    fn on_pointer_down(&mut self) {
        let Some(position) = self.pointer.current else {
            return;
        };

        if self.mode.draws() {
            self.builder.begin(position);
            self.stroke_properties = Some(self.current_properties);
            self.update_provisional_dirty();
            self.needs_redraw = true;
        }

        self.pointer.advance();
    }

    fn on_pointer_move(&mut self, last_raw: Option<Point>) {
        let Some(position) = self.pointer.current else {
            return;
        };

        if self.mode.draws() {
            match self.pointer.previous {
                Some(previous) if self.builder.is_started() => {
                    self.builder.extend(previous, position);
                    self.update_provisional_dirty();
                    self.needs_redraw = true;
                }
                _ => log::debug!("Pointer move without an active stroke; ignoring"),
            }
        } else if let Some(last) = last_raw {
            // Panning follows the raw pointer, not the smoothed path.
            self.pan_by(position.x - last.x, position.y - last.y);
        }

        self.pointer.advance();
    }

    fn on_pointer_up(&mut self) {
        if self.mode.draws() {
            match self.pointer.current {
                Some(position) if self.builder.is_started() => {
                    let path = self.builder.finish(position);
                    let properties = self
                        .stroke_properties
                        .take()
                        .unwrap_or(self.current_properties);
                    let stroke = Stroke::new(path, properties);

                    self.dirty_tracker.mark_stroke(&stroke);
                    log::debug!(
                        "Committed {} stroke with {} commands",
                        if properties.erase_mode { "erase" } else { "paint" },
                        stroke.path.len()
                    );
                    self.history.commit(stroke);
                    self.needs_redraw = true;
                }
                _ => log::debug!("Pointer release without a started stroke; nothing to commit"),
            }
        }

        self.stroke_properties = None;
        self.last_provisional_bounds = None;
        self.pointer.reset();
    }
}
