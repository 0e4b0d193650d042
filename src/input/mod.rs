//! Pointer handling and drawing session state.
//!
//! This module translates host pointer events into strokes. It maintains the
//! pointer state machine, the active draw mode, the current stroke style, and
//! the stroke history of the session.

pub mod events;
pub mod mode;
pub mod pointer;
pub mod state;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerEventKind};
pub use mode::DrawMode;
pub use pointer::{PointerPhase, PointerState};
pub use state::InputState;
