//! Terminal rendering layer.
//!
//! The board is drawn into a styled character framebuffer which is flushed to
//! the terminal with diff-based redraws. Drawing is pure (`board_view`); only
//! `renderer` touches the terminal, so everything above it can be unit-tested.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use board_view::{BoardView, FlipDir, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
