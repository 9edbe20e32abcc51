//! Core module - pure game rules with no terminal or I/O dependencies
//!
//! Board generation, geometry, reveal tracking and the turn state machine
//! all live here and can be exercised without a display surface.

pub mod board;
pub mod error;
pub mod geom;
pub mod reveal;
pub mod session;

pub use board::Board;
pub use error::{GameError, Result};
pub use geom::Layout;
pub use reveal::RevealState;
pub use session::{Effect, Session, Turn};
