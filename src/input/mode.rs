//! Draw mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How pointer drags are interpreted.
///
/// The mode is a session-wide selection. The erase flag of each stroke is
/// derived from it when the stroke starts and then frozen into the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DrawMode {
    /// Drags paint new strokes (default)
    #[default]
    Draw,
    /// Drags paint erase strokes that clear earlier strokes
    Erase,
    /// Drags pan all existing geometry instead of drawing
    Touch,
}

impl DrawMode {
    /// Whether drags in this mode produce strokes.
    pub fn draws(self) -> bool {
        !matches!(self, DrawMode::Touch)
    }

    /// Erase flag for strokes started in this mode.
    pub fn erases(self) -> bool {
        matches!(self, DrawMode::Erase)
    }

    /// Toolbar toggle: selecting the active mode again returns to `Draw`.
    pub fn toggled(self, target: DrawMode) -> DrawMode {
        if self == target { DrawMode::Draw } else { target }
    }
}
