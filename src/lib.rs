//! tui-pairs: a tile-matching memory game for the terminal.
//!
//! A grid of face-down tiles hides paired icons; click two tiles per turn,
//! matches stay face-up, mismatches flip back. The rules live in `core` with
//! no I/O so they can be tested headlessly; `term` renders into a framebuffer
//! flushed through crossterm; `input` maps terminal events to game inputs.

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
