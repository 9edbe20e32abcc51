//! Reveal state - which cells are currently face-up
//!
//! Same dimensions as the board, all face-down at session start, mutated only
//! by the turn controller. Also hosts the win check.

use crate::types::CellPos;

/// Boolean face-up grid, flat row-major like `Board`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    cols: u8,
    rows: u8,
    face_up: Vec<bool>,
}

impl RevealState {
    /// All face-down.
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            face_up: vec![false; cols as usize * rows as usize],
        }
    }

    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.col >= self.cols || pos.row >= self.rows {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Whether `pos` is face-up. Out of bounds reads as face-down.
    pub fn is_face_up(&self, pos: CellPos) -> bool {
        self.index(pos).map(|idx| self.face_up[idx]).unwrap_or(false)
    }

    /// Flip `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: CellPos, face_up: bool) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.face_up[idx] = face_up;
                true
            }
            None => false,
        }
    }

    /// Win check: true iff no cell is face-down.
    pub fn all_revealed(&self) -> bool {
        self.face_up.iter().all(|&up| up)
    }

    /// Number of face-up cells.
    pub fn revealed_count(&self) -> usize {
        self.face_up.iter().filter(|&&up| up).count()
    }
}
