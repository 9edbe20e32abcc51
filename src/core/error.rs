use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board of {cols}x{rows} has an odd number of tiles; pairs need an even count")]
    OddCellCount { cols: u8, rows: u8 },
    #[error("board dimensions must be at least 1x1")]
    EmptyBoard,
    #[error("board of {cols}x{rows} needs more icon pairs than icon ids exist")]
    TooManyPairs { cols: u8, rows: u8 },
}

pub type Result<T> = core::result::Result<T, GameError>;
