//! BoardView: maps the board and reveal grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Besides the plain scene it renders the two cosmetic overlays: the per-tile
//! flip sweep (a wipe that grows one column per step, standing in for a 3D
//! flip) and the win banner fade-in.

use crate::core::board::Board;
use crate::core::geom::Layout;
use crate::core::reveal::RevealState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellPos, IconId, TILE_H, TILE_W, WIN_FADE_STEPS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Which way a tile is flipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDir {
    Reveal,
    Cover,
}

const BG: Rgb = Rgb::new(60, 60, 100);
const COVER: Rgb = Rgb::new(255, 255, 255);
const WIN_GREEN: Rgb = Rgb::new(0, 255, 0);
const WIN_TEXT: &str = "YOU WIN!";

/// Glyph/color grid for icons; a pair's identity is the combination, so up to
/// `GLYPHS.len() * PALETTE.len()` distinct pairs render unambiguously.
const GLYPHS: [char; 12] = ['●', '■', '▲', '◆', '★', '♥', '♠', '♣', '☀', '☾', '♫', '✿'];
const PALETTE: [Rgb; 8] = [
    Rgb::new(220, 80, 80),
    Rgb::new(80, 220, 120),
    Rgb::new(240, 220, 80),
    Rgb::new(100, 140, 240),
    Rgb::new(200, 120, 220),
    Rgb::new(80, 220, 220),
    Rgb::new(255, 165, 0),
    Rgb::new(230, 230, 230),
];

/// A tile face as drawn, independent of game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Covered,
    Up(IconId),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView;

impl BoardView {
    /// Render the scene: background, face-down covers, face-up icons.
    pub fn render(
        &self,
        board: &Board,
        shown: &RevealState,
        layout: &Layout,
        viewport: Viewport,
    ) -> FrameBuffer {
        self.render_scene(board, shown, layout, viewport, None)
    }

    /// Render one step of a flip sweep on `cell`.
    ///
    /// `step` runs 0..=TILE_W. A reveal wipes the cover away left to right
    /// (the icon appears on the caller's next plain render); a cover wipes
    /// the cover back over the icon.
    pub fn render_flip(
        &self,
        board: &Board,
        shown: &RevealState,
        layout: &Layout,
        viewport: Viewport,
        cell: CellPos,
        dir: FlipDir,
        step: u16,
    ) -> FrameBuffer {
        // The animating tile starts from its pre-flip face regardless of the
        // committed reveal flag.
        let base_face = match dir {
            FlipDir::Reveal => Face::Covered,
            FlipDir::Cover => Face::Up(board.icon_at(cell).unwrap_or(0)),
        };
        let mut fb = self.render_scene(board, shown, layout, viewport, Some((cell, base_face)));

        let (ox, oy) = layout.origin(cell);
        let wipe = match dir {
            FlipDir::Reveal => CellStyle::new(BG, BG),
            FlipDir::Cover => CellStyle::new(COVER, COVER),
        };
        fb.fill_rect(ox, oy, step.min(TILE_W), TILE_H, ' ', wipe);
        fb
    }

    /// Render the scene with the win banner at fade step `step` (0..=WIN_FADE_STEPS).
    pub fn render_win(
        &self,
        board: &Board,
        shown: &RevealState,
        layout: &Layout,
        viewport: Viewport,
        step: u16,
    ) -> FrameBuffer {
        let mut fb = self.render_scene(board, shown, layout, viewport, None);

        let t = (step.min(WIN_FADE_STEPS) as u32 * 255 / WIN_FADE_STEPS as u32) as u8;
        let style = CellStyle::new(BG.lerp(WIN_GREEN, t), BG).bold();
        let x = viewport.width.saturating_sub(WIN_TEXT.len() as u16) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, WIN_TEXT, style);
        fb
    }

    fn render_scene(
        &self,
        board: &Board,
        shown: &RevealState,
        layout: &Layout,
        viewport: Viewport,
        force: Option<(CellPos, Face)>,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(BG, BG).cell(' '));

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let pos = CellPos::new(col, row);
                let face = match force {
                    Some((forced, f)) if forced == pos => f,
                    _ => {
                        if shown.is_face_up(pos) {
                            Face::Up(board.icon_at(pos).unwrap_or(0))
                        } else {
                            Face::Covered
                        }
                    }
                };
                self.draw_tile(&mut fb, layout, pos, face);
            }
        }
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &Layout, pos: CellPos, face: Face) {
        let (x, y) = layout.origin(pos);
        match face {
            Face::Covered => {
                fb.fill_rect(x, y, TILE_W, TILE_H, ' ', CellStyle::new(COVER, COVER));
            }
            Face::Up(icon) => {
                // A revealed tile melts into the background; only the icon
                // glyph marks it, centered in the tile box.
                fb.fill_rect(x, y, TILE_W, TILE_H, ' ', CellStyle::new(BG, BG));
                let (glyph, color) = icon_face(icon);
                fb.put_char(
                    x + TILE_W / 2,
                    y + TILE_H / 2,
                    glyph,
                    CellStyle::new(color, BG).bold(),
                );
            }
        }
    }
}

/// Glyph and color for an icon id.
fn icon_face(icon: IconId) -> (char, Rgb) {
    let glyph = GLYPHS[icon as usize % GLYPHS.len()];
    let color = PALETTE[(icon as usize / GLYPHS.len()) % PALETTE.len()];
    (glyph, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> (Board, RevealState, Layout) {
        let icons: Vec<IconId> = vec![0, 1, 1, 0];
        let board = Board::from_icons(2, 2, icons);
        let shown = RevealState::new(2, 2);
        let layout = Layout::new(2, 2, 40, 12);
        (board, shown, layout)
    }

    #[test]
    fn covered_tiles_render_as_solid_covers() {
        let (board, shown, layout) = small_board();
        let view = BoardView;
        let fb = view.render(&board, &shown, &layout, Viewport::new(40, 12));

        let (x, y) = layout.origin(CellPos::new(0, 0));
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.style.bg, COVER);
        // Gap between tiles stays background.
        let gap = fb.get(x + TILE_W, y).unwrap();
        assert_eq!(gap.style.bg, BG);
    }

    #[test]
    fn face_up_tile_shows_its_glyph() {
        let (board, mut shown, layout) = small_board();
        shown.set(CellPos::new(1, 0), true);
        let view = BoardView;
        let fb = view.render(&board, &shown, &layout, Viewport::new(40, 12));

        let (x, y) = layout.origin(CellPos::new(1, 0));
        let center = fb.get(x + TILE_W / 2, y + TILE_H / 2).unwrap();
        assert_eq!(center.ch, icon_face(1).0);
        assert_eq!(center.style.bg, BG);
    }

    #[test]
    fn reveal_sweep_eats_the_cover_left_to_right() {
        let (board, shown, layout) = small_board();
        let view = BoardView;
        let cell = CellPos::new(0, 0);
        let fb = view.render_flip(
            &board,
            &shown,
            &layout,
            Viewport::new(40, 12),
            cell,
            FlipDir::Reveal,
            2,
        );

        let (x, y) = layout.origin(cell);
        assert_eq!(fb.get(x, y).unwrap().style.bg, BG);
        assert_eq!(fb.get(x + 1, y).unwrap().style.bg, BG);
        assert_eq!(fb.get(x + 2, y).unwrap().style.bg, COVER);
    }

    #[test]
    fn win_banner_fades_toward_green() {
        let (board, shown, layout) = small_board();
        let view = BoardView;
        let vp = Viewport::new(40, 12);

        let grab = |fb: &FrameBuffer| {
            let x = (40 - WIN_TEXT.len() as u16) / 2;
            fb.get(x, 6).unwrap()
        };

        let start = view.render_win(&board, &shown, &layout, vp, 0);
        let end = view.render_win(&board, &shown, &layout, vp, WIN_FADE_STEPS);
        assert_eq!(grab(&start).ch, 'Y');
        assert_eq!(grab(&start).style.fg, BG);
        assert_eq!(grab(&end).style.fg, WIN_GREEN);
    }

    #[test]
    fn distinct_icons_get_distinct_faces() {
        for a in 0..72u8 {
            for b in (a + 1)..72u8 {
                assert_ne!(icon_face(a), icon_face(b), "icons {a} and {b} collide");
            }
        }
    }
}
