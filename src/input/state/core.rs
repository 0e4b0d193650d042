//! Drawing session state.

use crate::draw::{Color, DirtyTracker, PathBuilder, PathProperties, StrokeHistory};
use crate::input::{mode::DrawMode, pointer::PointerState};
use crate::util::Rect;

/// Main input state containing all drawing session state.
///
/// Owns the stroke history, the pointer state machine, the in-progress path and
/// the current stroke style. Pointer events and toolbar actions mutate it; every
/// mutation that changes what is on screen sets `needs_redraw` and records
/// damage so the host can repaint once per frame.
pub struct InputState {
    /// Committed strokes and the redo buffer
    pub(crate) history: StrokeHistory,
    /// Pointer phase and sampled positions
    pub(crate) pointer: PointerState,
    /// Builder for the stroke being drawn
    pub(crate) builder: PathBuilder,
    /// Style snapshot taken when the in-progress stroke started
    pub(crate) stroke_properties: Option<PathProperties>,
    /// Style applied to the next stroke (edited by toolbar/dialogs)
    pub(crate) current_properties: PathProperties,
    /// Active draw mode
    pub(crate) mode: DrawMode,
    /// Canvas background painted beneath the stroke layer (None = transparent)
    pub background: Option<Color>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the host after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by the host after configuration)
    pub screen_height: u32,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
    /// Cached bounds for the in-progress stroke (if any)
    pub(crate) last_provisional_bounds: Option<Rect>,
}

impl InputState {
    /// Creates a new session in `Draw` mode with an empty history.
    ///
    /// Screen dimensions default to 0 and should be updated by the host
    /// after surface configuration (see `update_screen_dimensions`).
    ///
    /// # Arguments
    /// * `properties` - Style for the first stroke
    /// * `background` - Canvas background color, `None` for transparent
    pub fn with_defaults(properties: PathProperties, background: Option<Color>) -> Self {
        let mut current_properties = properties;
        current_properties.erase_mode = false;

        Self {
            history: StrokeHistory::new(),
            pointer: PointerState::new(),
            builder: PathBuilder::new(),
            stroke_properties: None,
            current_properties,
            mode: DrawMode::Draw,
            background,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
            dirty_tracker: DirtyTracker::new(),
            last_provisional_bounds: None,
        }
    }

    /// Updates screen dimensions after host configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Read access to the stroke history.
    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    /// Read access to the pointer state machine.
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Returns the active draw mode.
    pub fn draw_mode(&self) -> DrawMode {
        self.mode
    }

    /// Whether a stroke is currently being drawn.
    pub fn is_drawing(&self) -> bool {
        !self.pointer.is_idle() && self.builder.is_started()
    }

    /// Clears any cached in-progress bounds and marks their damage region.
    pub(crate) fn clear_provisional_dirty(&mut self) {
        if let Some(prev) = self.last_provisional_bounds.take() {
            self.dirty_tracker.mark_rect(prev);
        }
    }

    /// Updates tracked in-progress stroke bounds for dirty-region purposes.
    pub(crate) fn update_provisional_dirty(&mut self) {
        let width = self
            .stroke_properties
            .unwrap_or(self.current_properties)
            .stroke_width;
        let new_bounds = self.builder.path().bounding_box(width);
        let previous = self.last_provisional_bounds;

        if new_bounds != previous {
            if let Some(prev) = previous {
                self.dirty_tracker.mark_rect(prev);
            }
        }

        match new_bounds {
            Some(bounds) => self.dirty_tracker.mark_rect(bounds),
            // Too large for pixel coordinates
            None if self.builder.is_started() => self.dirty_tracker.mark_full(),
            None => {}
        }
        self.last_provisional_bounds = new_bounds;
    }

    /// Discards the in-progress stroke and returns the pointer to `Idle`.
    pub(crate) fn abandon_stroke(&mut self) {
        if self.builder.is_started() {
            log::debug!(
                "Abandoning in-progress stroke ({} commands)",
                self.builder.path().len()
            );
        }
        self.builder.abandon();
        self.stroke_properties = None;
        self.pointer.reset();
        self.clear_provisional_dirty();
    }
}
