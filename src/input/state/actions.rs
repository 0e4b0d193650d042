use crate::draw::{Color, PathProperties, StrokeCap, StrokeJoin};
use crate::input::mode::DrawMode;

use super::InputState;

impl InputState {
    /// Undoes the most recent committed stroke.
    ///
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            self.dirty_tracker.mark_full();
            self.needs_redraw = true;
            log::debug!("Undo: {} strokes remain", self.history.committed().len());
        } else {
            log::debug!("Nothing to undo");
        }
        undone
    }

    /// Restores the most recently undone stroke.
    ///
    /// Returns `false` when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            self.dirty_tracker.mark_full();
            self.needs_redraw = true;
            log::debug!("Redo: {} strokes visible", self.history.committed().len());
        } else {
            log::debug!("Nothing to redo");
        }
        redone
    }

    /// Switches the draw mode.
    ///
    /// Any in-progress stroke is discarded (never committed) and the pointer
    /// returns to `Idle`. The erase flag of the current style follows the mode.
    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.abandon_stroke();

        let previous = self.mode;
        self.mode = mode;
        self.current_properties.erase_mode = mode.erases();

        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
        log::info!("Switched from {:?} to {:?} mode", previous, mode);
    }

    /// Toolbar toggle: activates `target`, or returns to `Draw` if it is already active.
    pub fn toggle_draw_mode(&mut self, target: DrawMode) -> DrawMode {
        let next = self.mode.toggled(target);
        self.set_draw_mode(next);
        next
    }

    /// Returns a snapshot of the style the next stroke will use.
    pub fn properties(&self) -> PathProperties {
        self.current_properties
    }

    /// Applies an edited style in one step (e.g. the result of a properties dialog).
    ///
    /// The erase flag stays derived from the draw mode. Like a mode switch, this
    /// resets the pointer and discards any in-progress stroke.
    pub fn apply_properties(&mut self, properties: PathProperties) {
        self.abandon_stroke();

        let mut properties = properties;
        if !(properties.stroke_width.is_finite() && properties.stroke_width > 0.0) {
            log::warn!(
                "Ignoring invalid stroke width {}; keeping {:.1}",
                properties.stroke_width,
                self.current_properties.stroke_width
            );
            properties.stroke_width = self.current_properties.stroke_width;
        }
        properties.alpha = properties.alpha.clamp(0.0, 1.0);
        properties.erase_mode = self.mode.erases();
        self.current_properties = properties;
        self.needs_redraw = true;
    }

    /// Sets the color of the next stroke.
    pub fn set_color(&mut self, color: Color) {
        self.current_properties.color = color;
        self.needs_redraw = true;
    }

    /// Sets the width of the next stroke.
    ///
    /// Returns `false` and keeps the old width if `width` is not a positive number.
    pub fn set_stroke_width(&mut self, width: f64) -> bool {
        if !(width.is_finite() && width > 0.0) {
            log::warn!("Ignoring invalid stroke width {width}");
            return false;
        }
        self.current_properties.stroke_width = width;
        self.needs_redraw = true;
        true
    }

    /// Sets the opacity multiplier of the next stroke, clamped to 0.0 - 1.0.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.current_properties.alpha = alpha.clamp(0.0, 1.0);
        self.needs_redraw = true;
    }

    /// Sets the cap style of the next stroke.
    pub fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.current_properties.stroke_cap = cap;
        self.needs_redraw = true;
    }

    /// Sets the join style of the next stroke.
    pub fn set_stroke_join(&mut self, join: StrokeJoin) {
        self.current_properties.stroke_join = join;
        self.needs_redraw = true;
    }
}
