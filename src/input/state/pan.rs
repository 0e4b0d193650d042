use super::InputState;

impl InputState {
    /// Translates all committed strokes and the in-progress path by `(dx, dy)`.
    ///
    /// Strokes are moved in place through the history's own storage; the redo
    /// buffer is not translated. A zero delta is a no-op.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        self.history.translate_all(dx, dy);
        self.builder.translate(dx, dy);

        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
        log::trace!("Panned canvas by ({dx:.1}, {dy:.1})");
    }
}
