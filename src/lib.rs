//! Freehand drawing surface core.
//!
//! Converts single-pointer drags into smoothed vector strokes, keeps an ordered
//! stroke history with linear undo/redo, and composites normal and erase strokes
//! with Cairo so erasing never removes the canvas background.

pub mod config;
pub mod draw;
pub mod input;
pub mod report;
pub mod script;
pub mod util;

pub use config::Config;
