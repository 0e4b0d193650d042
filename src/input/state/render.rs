use crate::draw::{PathProperties, VectorPath, render_canvas};

use super::InputState;

impl InputState {
    /// Returns the stroke currently being drawn for live preview.
    ///
    /// # Returns
    /// - `Some((path, properties))` while the pointer is down in Draw/Erase mode
    /// - `None` when idle or panning
    pub fn in_progress_stroke(&self) -> Option<(&VectorPath, &PathProperties)> {
        if !self.is_drawing() {
            return None;
        }
        self.stroke_properties
            .as_ref()
            .map(|properties| (self.builder.path(), properties))
    }

    /// Renders the full canvas for the current state.
    ///
    /// This is a pure function of the session state; it does not touch the
    /// redraw flag.
    pub fn render(&self, ctx: &cairo::Context) -> Result<(), cairo::Error> {
        render_canvas(
            ctx,
            self.background,
            self.history.committed(),
            self.in_progress_stroke(),
        )
    }

    /// Renders only if a redraw is pending, then clears the flag.
    ///
    /// Damage rectangles are not drained here; hosts that present partial
    /// updates call `take_dirty_regions` after each frame.
    ///
    /// # Returns
    /// `Ok(true)` if a frame was rendered, `Ok(false)` if nothing changed.
    pub fn render_if_needed(&mut self, ctx: &cairo::Context) -> Result<bool, cairo::Error> {
        if !self.needs_redraw {
            return Ok(false);
        }
        self.render(ctx)?;
        self.needs_redraw = false;
        Ok(true)
    }
}
