//! Session module - the turn controller state machine
//!
//! A session owns the immutable board and the reveal grid and runs the one
//! piece of nontrivial control logic in the game: first pick, second pick,
//! match/mismatch resolution. State changes are committed here; the visual
//! side of each transition is described by `Effect` values that the caller
//! plays back, so the rules never touch the terminal.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::reveal::RevealState;
use crate::types::CellPos;

/// Where the player is within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// No cell selected.
    Idle,
    /// First cell is face-up, awaiting the second pick.
    OneSelected(CellPos),
}

/// Observable visual side effect of a click, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Flip the cell open with the reveal sweep.
    Reveal(CellPos),
    /// Hold the mismatched pair on screen for the fixed pause.
    Pause,
    /// Flip the cell closed with the cover sweep.
    Cover(CellPos),
}

/// Longest effect sequence: reveal + pause + two covers.
pub type Effects = ArrayVec<Effect, 4>;

/// One complete play-through from deal to win.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    revealed: RevealState,
    turn: Turn,
}

impl Session {
    pub fn new(board: Board) -> Self {
        let revealed = RevealState::new(board.cols(), board.rows());
        Self {
            board,
            revealed,
            turn: Turn::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revealed(&self) -> &RevealState {
        &self.revealed
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Win check, evaluated once per loop iteration.
    pub fn is_won(&self) -> bool {
        self.revealed.all_revealed()
    }

    /// Apply one click. `None` means the pointer missed the board.
    ///
    /// Clicks outside the board, on a face-up cell, or on the already
    /// selected first cell are no-ops. A mismatch re-covers both cells
    /// unconditionally.
    pub fn handle_click(&mut self, target: Option<CellPos>) -> Effects {
        let mut effects = Effects::new();

        let Some(pos) = target else {
            return effects;
        };
        if self.revealed.is_face_up(pos) {
            // Covers repeat clicks on the first selection as well.
            return effects;
        }

        self.revealed.set(pos, true);
        effects.push(Effect::Reveal(pos));

        match self.turn {
            Turn::Idle => {
                log::trace!("first pick at ({}, {})", pos.col, pos.row);
                self.turn = Turn::OneSelected(pos);
            }
            Turn::OneSelected(first) => {
                let a = self.board.icon_at(first);
                let b = self.board.icon_at(pos);
                if a == b {
                    log::debug!(
                        "matched icon {:?} at ({}, {}) and ({}, {})",
                        a,
                        first.col,
                        first.row,
                        pos.col,
                        pos.row
                    );
                } else {
                    log::debug!(
                        "mismatch {:?} vs {:?}, covering both",
                        a,
                        b
                    );
                    effects.push(Effect::Pause);
                    effects.push(Effect::Cover(first));
                    effects.push(Effect::Cover(pos));
                    self.revealed.set(first, false);
                    self.revealed.set(pos, false);
                }
                self.turn = Turn::Idle;
            }
        }

        effects
    }
}
