//! Command-line options.
//!
//! Board dimensions and the deal seed are the only runtime knobs; tile size,
//! colors and timing are build-time constants in `types`.

use clap::Parser;

use crate::core::error::{GameError, Result};
use crate::types::{DEFAULT_BOARD_COLS, DEFAULT_BOARD_ROWS};

#[derive(Parser, Debug, Clone)]
#[command(name = "tui-pairs", version, about = "Tile-matching memory game for the terminal")]
pub struct GameConfig {
    /// Board columns
    #[arg(long, default_value_t = DEFAULT_BOARD_COLS, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub cols: u8,

    /// Board rows
    #[arg(long, default_value_t = DEFAULT_BOARD_ROWS, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub rows: u8,

    /// Seed for a reproducible deal (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Startup validation: pairs need an even tile count.
    pub fn validate(&self) -> Result<()> {
        if self.cols as usize * self.rows as usize % 2 != 0 {
            return Err(GameError::OddCellCount {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }
}
