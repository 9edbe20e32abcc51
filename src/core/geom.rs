//! Geometry mapper - cell coordinates to screen cells and back
//!
//! Two mutually-consistent pure functions over a fixed layout: `origin` is an
//! affine map from grid position to the tile's top-left screen cell, and
//! `cell_at` is its exact inverse, returning `None` for gaps, margins and
//! anything outside the board block. Tile boxes never overlap.

use crate::types::{CellPos, GAP_X, GAP_Y, TILE_H, TILE_W};

/// Horizontal stride from one tile origin to the next (trailing gap included).
const PITCH_X: u16 = TILE_W + GAP_X;
const PITCH_Y: u16 = TILE_H + GAP_Y;

/// Board placement within a viewport, computed once per layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    cols: u8,
    rows: u8,
    x_margin: u16,
    y_margin: u16,
}

impl Layout {
    /// Center a cols x rows board in a `view_w` x `view_h` viewport.
    pub fn new(cols: u8, rows: u8, view_w: u16, view_h: u16) -> Self {
        let block_w = cols as u16 * PITCH_X;
        let block_h = rows as u16 * PITCH_Y;
        Self {
            cols,
            rows,
            x_margin: view_w.saturating_sub(block_w) / 2,
            y_margin: view_h.saturating_sub(block_h) / 2,
        }
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Top-left screen cell of the tile at `pos`.
    pub fn origin(&self, pos: CellPos) -> (u16, u16) {
        (
            self.x_margin + pos.col as u16 * PITCH_X,
            self.y_margin + pos.row as u16 * PITCH_Y,
        )
    }

    /// The unique tile whose box contains screen cell (x, y), if any.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<CellPos> {
        let rel_x = x.checked_sub(self.x_margin)?;
        let rel_y = y.checked_sub(self.y_margin)?;

        let col = rel_x / PITCH_X;
        let row = rel_y / PITCH_Y;
        if col >= self.cols as u16 || row >= self.rows as u16 {
            return None;
        }
        // Points in the trailing gap after a tile belong to no cell.
        if rel_x % PITCH_X >= TILE_W || rel_y % PITCH_Y >= TILE_H {
            return None;
        }
        Some(CellPos::new(col as u8, row as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_affine_from_margin() {
        let layout = Layout::new(4, 4, 64, 24);
        let (x0, y0) = layout.origin(CellPos::new(0, 0));
        let (x1, y1) = layout.origin(CellPos::new(1, 2));
        assert_eq!(x1, x0 + PITCH_X);
        assert_eq!(y1, y0 + 2 * PITCH_Y);
    }

    #[test]
    fn cell_at_round_trips_every_tile_offset() {
        let layout = Layout::new(4, 4, 64, 24);
        for col in 0..4 {
            for row in 0..4 {
                let pos = CellPos::new(col, row);
                let (ox, oy) = layout.origin(pos);
                for dx in 0..TILE_W {
                    for dy in 0..TILE_H {
                        assert_eq!(layout.cell_at(ox + dx, oy + dy), Some(pos));
                    }
                }
            }
        }
    }

    #[test]
    fn gaps_and_margins_resolve_to_none() {
        let layout = Layout::new(4, 4, 64, 24);
        let (ox, oy) = layout.origin(CellPos::new(0, 0));
        // First screen cell of the gap to the right / below tile (0,0).
        assert_eq!(layout.cell_at(ox + TILE_W, oy), None);
        assert_eq!(layout.cell_at(ox, oy + TILE_H), None);
        // Top-left margin.
        assert_eq!(layout.cell_at(0, 0), None);
    }

    #[test]
    fn beyond_last_column_and_row_is_none() {
        let layout = Layout::new(4, 4, 64, 24);
        let (ox, oy) = layout.origin(CellPos::new(3, 3));
        assert_eq!(layout.cell_at(ox + PITCH_X, oy), None);
        assert_eq!(layout.cell_at(ox, oy + PITCH_Y), None);
    }
}
