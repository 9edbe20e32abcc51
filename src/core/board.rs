//! Board module - the shuffled grid of paired icons
//!
//! The board is a cols x rows grid where each cell holds an icon id and every
//! id appears exactly twice. Uses a flat row-major Vec.
//! Coordinates: (col, row) with col in 0..cols (left to right) and row in
//! 0..rows (top to bottom). Generated once per session, immutable after.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{GameError, Result};
use crate::types::{CellPos, IconId};

/// The icon grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of icon ids, row-major order (row * cols + col)
    icons: Vec<IconId>,
}

impl Board {
    /// Generate a shuffled board.
    ///
    /// Builds one pair of each icon id in `0..cols*rows/2`, shuffles the flat
    /// sequence uniformly (Fisher-Yates via `SliceRandom`), then deals
    /// row-major. An odd tile count is a configuration error.
    pub fn generate<R: Rng + ?Sized>(cols: u8, rows: u8, rng: &mut R) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(GameError::EmptyBoard);
        }
        let total = cols as usize * rows as usize;
        if total % 2 != 0 {
            return Err(GameError::OddCellCount { cols, rows });
        }
        // Pair ids run 0..total/2 and must each fit in an IconId.
        if total / 2 > IconId::MAX as usize + 1 {
            return Err(GameError::TooManyPairs { cols, rows });
        }

        let mut icons: Vec<IconId> = Vec::with_capacity(total);
        for id in 0..total / 2 {
            icons.push(id as IconId);
            icons.push(id as IconId);
        }
        icons.shuffle(rng);

        Ok(Self { cols, rows, icons })
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of icon pairs on the board.
    pub fn pair_count(&self) -> usize {
        self.icons.len() / 2
    }

    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.col >= self.cols || pos.row >= self.rows {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Icon at `pos`, or `None` if out of bounds.
    pub fn icon_at(&self, pos: CellPos) -> Option<IconId> {
        self.index(pos).map(|idx| self.icons[idx])
    }

    /// Get a reference to the flat icon array (row-major).
    pub fn icons(&self) -> &[IconId] {
        &self.icons
    }

    /// Build a board from explicit icons for testing.
    #[cfg(test)]
    pub fn from_icons(cols: u8, rows: u8, icons: Vec<IconId>) -> Self {
        assert_eq!(icons.len(), cols as usize * rows as usize);
        Self { cols, rows, icons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generate_rejects_odd_tile_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Board::generate(3, 3, &mut rng),
            Err(GameError::OddCellCount { cols: 3, rows: 3 })
        );
    }

    #[test]
    fn generate_rejects_more_pairs_than_icon_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        // 24x24 would need 288 pair ids; only 256 fit in an IconId.
        assert_eq!(
            Board::generate(24, 24, &mut rng),
            Err(GameError::TooManyPairs { cols: 24, rows: 24 })
        );
    }

    #[test]
    fn generate_fills_the_largest_representable_board() {
        let mut rng = StdRng::seed_from_u64(1);
        // 16x32 = 512 tiles = 256 pairs, exactly the IconId range.
        let board = Board::generate(16, 32, &mut rng).unwrap();
        assert_eq!(board.icons().len(), 512);
        assert_eq!(board.pair_count(), 256);
    }

    #[test]
    fn generate_rejects_zero_dimension() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Board::generate(0, 4, &mut rng), Err(GameError::EmptyBoard));
        assert_eq!(Board::generate(4, 0, &mut rng), Err(GameError::EmptyBoard));
    }

    #[test]
    fn generate_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = Board::generate(4, 4, &mut a).unwrap();
        let second = Board::generate(4, 4, &mut b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn icon_at_out_of_bounds_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::generate(4, 4, &mut rng).unwrap();
        assert_eq!(board.icon_at(CellPos::new(4, 0)), None);
        assert_eq!(board.icon_at(CellPos::new(0, 4)), None);
    }
}
