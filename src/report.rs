//! Human- and machine-readable summaries of a drawing session.

use crate::input::{DrawMode, InputState};
use crate::script::ReplayOutcome;
use crate::util::{self, Rect};
use serde::Serialize;
use std::fmt;

/// Summary of one committed stroke.
#[derive(Debug, Clone, Serialize)]
pub struct StrokeSummary {
    pub commands: usize,
    pub width: f64,
    pub color: &'static str,
    pub erase: bool,
    pub bounds: Option<Rect>,
}

/// Snapshot of a session's stroke history.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub mode: DrawMode,
    pub committed: usize,
    pub undone: usize,
    pub strokes: Vec<StrokeSummary>,
    pub replay: ReplayOutcome,
}

impl SessionReport {
    pub fn new(state: &InputState, replay: ReplayOutcome) -> Self {
        let history = state.history();
        let strokes = history
            .committed()
            .iter()
            .map(|stroke| StrokeSummary {
                commands: stroke.path.len(),
                width: stroke.properties.stroke_width,
                color: util::color_to_name(&stroke.properties.color),
                erase: stroke.properties.erase_mode,
                bounds: stroke.bounding_box(),
            })
            .collect();

        Self {
            mode: state.draw_mode(),
            committed: history.committed().len(),
            undone: history.undone().len(),
            strokes,
            replay,
        }
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode: {:?}", self.mode)?;
        writeln!(f, "committed: {}", self.committed)?;
        writeln!(f, "undone: {}", self.undone)?;
        for (index, stroke) in self.strokes.iter().enumerate() {
            write!(
                f,
                "  #{index}: {} commands, width {:.1}, {}",
                stroke.commands,
                stroke.width,
                if stroke.erase { "erase" } else { stroke.color }
            )?;
            if let Some(rect) = stroke.bounds {
                write!(
                    f,
                    ", bounds {}x{} at ({}, {})",
                    rect.width, rect.height, rect.x, rect.y
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
