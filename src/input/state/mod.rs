mod actions;
mod core;
mod pan;
mod pointer;
mod render;

pub use core::InputState;
