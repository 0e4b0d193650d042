//! Stroke render style.

use super::color::{BLACK, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape drawn at the open ends of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeCap {
    /// Flat end exactly at the endpoint
    Butt,
    /// Half-disc centred on the endpoint
    Round,
    /// Flat end projecting half the stroke width past the endpoint
    Square,
}

impl From<StrokeCap> for cairo::LineCap {
    fn from(cap: StrokeCap) -> Self {
        match cap {
            StrokeCap::Butt => cairo::LineCap::Butt,
            StrokeCap::Round => cairo::LineCap::Round,
            StrokeCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Shape drawn where two segments of a stroke meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeJoin {
    /// Sharp corner extended to the miter limit
    Miter,
    /// Rounded corner
    Round,
    /// Corner cut off flat
    Bevel,
}

impl From<StrokeJoin> for cairo::LineJoin {
    fn from(join: StrokeJoin) -> Self {
        match join {
            StrokeJoin::Miter => cairo::LineJoin::Miter,
            StrokeJoin::Round => cairo::LineJoin::Round,
            StrokeJoin::Bevel => cairo::LineJoin::Bevel,
        }
    }
}

/// Render style of a single stroke.
///
/// This is a plain value: committed strokes hold their own copy, so editing the
/// session's current properties never alters what has already been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathProperties {
    /// Stroke width in pixels (always > 0)
    pub stroke_width: f64,
    /// Stroke color
    pub color: Color,
    /// Extra opacity multiplier applied on top of `color.a` (0.0 - 1.0)
    pub alpha: f64,
    /// End cap style
    pub stroke_cap: StrokeCap,
    /// Corner join style
    pub stroke_join: StrokeJoin,
    /// Subtractive stroke: clears earlier strokes within its footprint
    pub erase_mode: bool,
}

impl Default for PathProperties {
    fn default() -> Self {
        Self {
            stroke_width: 10.0,
            color: BLACK,
            alpha: 1.0,
            stroke_cap: StrokeCap::Round,
            stroke_join: StrokeJoin::Round,
            erase_mode: false,
        }
    }
}

impl PathProperties {
    /// Color actually painted, with `alpha` folded into the color's own alpha.
    pub fn effective_color(&self) -> Color {
        self.color.with_alpha(self.color.a * self.alpha.clamp(0.0, 1.0))
    }
}
