//! Replay scripts: a recorded sequence of pointer events and toolbar actions.
//!
//! Scripts drive an [`InputState`] without a windowing host, which makes
//! gestures reproducible from the command line and in tests.
//!
//! # Example TOML
//! ```toml
//! [[steps]]
//! action = "width"
//! width = 4.0
//!
//! [[steps]]
//! action = "start"
//! x = 0.0
//! y = 0.0
//!
//! [[steps]]
//! action = "move"
//! x = 10.0
//! y = 0.0
//!
//! [[steps]]
//! action = "end"
//! x = 20.0
//! y = 0.0
//!
//! [[steps]]
//! action = "undo"
//! ```

use crate::config::ColorSpec;
use crate::draw::{StrokeCap, StrokeJoin};
use crate::input::{DrawMode, InputState, PointerEvent};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a replay script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Start { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    End { x: f64, y: f64 },
    Cancel { x: f64, y: f64 },
    Undo,
    Redo,
    Mode { mode: DrawMode },
    Color { color: ColorSpec },
    Width { width: f64 },
    Alpha { alpha: f64 },
    Cap { cap: StrokeCap },
    Join { join: StrokeJoin },
}

/// A parsed replay script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Counts of what a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Pointer events delivered
    pub pointer_events: usize,
    /// Undo requests that changed the history
    pub undos: usize,
    /// Redo requests that changed the history
    pub redos: usize,
    /// Undo/redo requests that had nothing to do
    pub ignored: usize,
}

impl Script {
    /// Parses a script from TOML text and validates each step.
    pub fn from_toml_str(text: &str) -> Result<Self, ScriptError> {
        let script: Script = toml::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        for (index, step) in self.steps.iter().enumerate() {
            let invalid = |reason: String| ScriptError::InvalidStep { index, reason };
            match step {
                Step::Start { x, y }
                | Step::Move { x, y }
                | Step::End { x, y }
                | Step::Cancel { x, y } => {
                    if !(x.is_finite() && y.is_finite()) {
                        return Err(invalid(format!("position ({x}, {y}) is not finite")));
                    }
                }
                Step::Width { width } => {
                    if !(width.is_finite() && *width > 0.0) {
                        return Err(invalid(format!("width {width} must be positive")));
                    }
                }
                Step::Alpha { alpha } => {
                    if !(0.0..=1.0).contains(alpha) {
                        return Err(invalid(format!("alpha {alpha} outside 0.0-1.0")));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Feeds every step into `state` in order.
    pub fn replay(&self, state: &mut InputState) -> ReplayOutcome {
        let mut outcome = ReplayOutcome::default();

        for step in &self.steps {
            match step {
                Step::Start { x, y } => {
                    state.on_pointer_event(&mut PointerEvent::start(*x, *y));
                    outcome.pointer_events += 1;
                }
                Step::Move { x, y } => {
                    state.on_pointer_event(&mut PointerEvent::moved(*x, *y));
                    outcome.pointer_events += 1;
                }
                Step::End { x, y } => {
                    state.on_pointer_event(&mut PointerEvent::end(*x, *y));
                    outcome.pointer_events += 1;
                }
                Step::Cancel { x, y } => {
                    state.on_pointer_event(&mut PointerEvent::cancel(*x, *y));
                    outcome.pointer_events += 1;
                }
                Step::Undo => {
                    if state.undo() {
                        outcome.undos += 1;
                    } else {
                        outcome.ignored += 1;
                    }
                }
                Step::Redo => {
                    if state.redo() {
                        outcome.redos += 1;
                    } else {
                        outcome.ignored += 1;
                    }
                }
                Step::Mode { mode } => state.set_draw_mode(*mode),
                Step::Color { color } => state.set_color(color.to_color()),
                Step::Width { width } => {
                    state.set_stroke_width(*width);
                }
                Step::Alpha { alpha } => state.set_alpha(*alpha),
                Step::Cap { cap } => state.set_stroke_cap(*cap),
                Step::Join { join } => state.set_stroke_join(*join),
            }
        }

        log::debug!("Replay finished: {:?}", outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, PathProperties};

    const SCRIPT: &str = r#"
        [[steps]]
        action = "color"
        color = "blue"

        [[steps]]
        action = "cap"
        cap = "square"

        [[steps]]
        action = "start"
        x = 0.0
        y = 0.0

        [[steps]]
        action = "move"
        x = 10.0
        y = 0.0

        [[steps]]
        action = "end"
        x = 20.0
        y = 0.0

        [[steps]]
        action = "mode"
        mode = "erase"

        [[steps]]
        action = "start"
        x = 5.0
        y = 0.0

        [[steps]]
        action = "end"
        x = 15.0
        y = 0.0

        [[steps]]
        action = "undo"

        [[steps]]
        action = "redo"

        [[steps]]
        action = "redo"
    "#;

    #[test]
    fn parses_tagged_steps() {
        let script = Script::from_toml_str(SCRIPT).unwrap();
        assert_eq!(script.steps.len(), 11);
        assert_eq!(script.steps[2], Step::Start { x: 0.0, y: 0.0 });
        assert_eq!(
            script.steps[5],
            Step::Mode {
                mode: DrawMode::Erase
            }
        );
    }

    #[test]
    fn replay_drives_session() {
        let script = Script::from_toml_str(SCRIPT).unwrap();
        let mut state = InputState::with_defaults(PathProperties::default(), None);
        let outcome = script.replay(&mut state);

        assert_eq!(outcome.pointer_events, 5);
        assert_eq!(outcome.undos, 1);
        assert_eq!(outcome.redos, 1);
        assert_eq!(outcome.ignored, 1);

        let committed = state.history().committed();
        assert_eq!(committed.len(), 2);
        assert_eq!(committed[0].properties.color, BLUE);
        assert_eq!(committed[0].properties.stroke_cap, StrokeCap::Square);
        assert!(committed[1].properties.erase_mode);
    }

    #[test]
    fn rejects_non_positive_width() {
        let err = Script::from_toml_str("[[steps]]\naction = \"width\"\nwidth = 0.0\n")
            .unwrap_err();
        assert!(matches!(err, ScriptError::InvalidStep { index: 0, .. }));
    }

    #[test]
    fn rejects_unknown_action() {
        let err = Script::from_toml_str("[[steps]]\naction = \"teleport\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Script::load(Path::new("/nonexistent/script.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/script.toml"));
    }
}
