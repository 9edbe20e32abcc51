//! Core types shared across the application
//! This module contains pure data types and tuning constants with no external dependencies

/// Default board dimensions (columns x rows, product must be even)
pub const DEFAULT_BOARD_COLS: u8 = 4;
pub const DEFAULT_BOARD_ROWS: u8 = 4;

/// Tile footprint in terminal cells.
///
/// Terminal glyphs are roughly twice as tall as wide, so a 6x3 tile with a
/// 2x1 gap reads as a square board.
pub const TILE_W: u16 = 6;
pub const TILE_H: u16 = 3;
pub const GAP_X: u16 = 2;
pub const GAP_Y: u16 = 1;

/// Timing constants (milliseconds)
pub const FLIP_STEP_MS: u64 = 15;
pub const MISMATCH_PAUSE_MS: u64 = 500;
pub const WIN_STEP_MS: u64 = 50;
pub const WIN_LINGER_MS: u64 = 2000;
pub const INPUT_POLL_MS: u64 = 100;

/// Number of frames in the win banner fade-in
pub const WIN_FADE_STEPS: u16 = 30;

/// Icon identifier hidden under a tile; each id appears exactly twice per board.
pub type IconId = u8;

/// One grid position, (column, row) from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub col: u8,
    pub row: u8,
}

impl CellPos {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

/// Inputs the game loop reacts to, decoupled from the terminal event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Left-button release at a terminal cell position.
    Click { x: u16, y: u16 },
    /// Terminal was resized; re-layout and redraw.
    Redraw,
    Quit,
}
