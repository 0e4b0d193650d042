//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{Color, PathProperties, StrokeCap, StrokeJoin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the style of the first stroke when a session starts. Users can
/// change these values at runtime through the stroke-property controls.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue, yellow, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Default stroke opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_alpha")]
    pub default_alpha: f64,

    /// Default end cap (butt, round, square)
    #[serde(default = "default_cap")]
    pub default_cap: StrokeCap,

    /// Default corner join (miter, round, bevel)
    #[serde(default = "default_join")]
    pub default_join: StrokeJoin,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_alpha: default_alpha(),
            default_cap: default_cap(),
            default_join: default_join(),
        }
    }
}

impl DrawingConfig {
    /// Style for the first stroke of a session.
    pub fn default_properties(&self) -> PathProperties {
        PathProperties {
            stroke_width: self.default_width,
            color: self.default_color.to_color(),
            alpha: self.default_alpha,
            stroke_cap: self.default_cap,
            stroke_join: self.default_join,
            erase_mode: false,
        }
    }
}

/// Drawing surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color [R, G, B, A] (0.0-1.0 range); erase strokes never clear it
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 4],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background_color: default_background_color(),
        }
    }
}

impl CanvasConfig {
    /// Background as a [`Color`].
    pub fn background(&self) -> Color {
        let [r, g, b, a] = self.background_color;
        Color { r, g, b, a }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    10.0
}

fn default_alpha() -> f64 {
    1.0
}

fn default_cap() -> StrokeCap {
    StrokeCap::Round
}

fn default_join() -> StrokeJoin {
    StrokeJoin::Round
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
