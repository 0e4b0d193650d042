//! Stroke geometry, history and Cairo compositing.
//!
//! This module defines the core drawing types:
//! - [`Color`] and [`PathProperties`]: how a stroke is painted
//! - [`VectorPath`] and [`PathBuilder`]: smoothed freehand geometry
//! - [`Stroke`] and [`StrokeHistory`]: committed strokes with undo/redo
//! - [`render_canvas`]: layered compositing of normal and erase strokes

pub mod builder;
pub mod color;
pub mod dirty;
pub mod history;
pub mod path;
pub mod properties;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use builder::PathBuilder;
pub use color::Color;
pub use dirty::DirtyTracker;
pub use history::StrokeHistory;
pub use path::{PathCommand, Point, VectorPath};
pub use properties::{PathProperties, StrokeCap, StrokeJoin};
pub use render::{render_background, render_canvas, render_stroke};
pub use stroke::Stroke;

pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE, YELLOW};
