//! Terminal memory game runner.
//!
//! One poll-driven loop: terminal events are mapped to game inputs, clicks
//! are resolved to cells and fed to the session state machine, and the
//! resulting animation effects are played back with blocking waits, exactly
//! one at a time. Ends after the win sequence or on a quit key.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_pairs::config::GameConfig;
use tui_pairs::core::{Board, Effect, Layout, RevealState, Session};
use tui_pairs::input::map_event;
use tui_pairs::term::{BoardView, FlipDir, TerminalRenderer, Viewport};
use tui_pairs::types::{
    GameInput, FLIP_STEP_MS, INPUT_POLL_MS, MISMATCH_PAUSE_MS, TILE_W, WIN_FADE_STEPS,
    WIN_LINGER_MS, WIN_STEP_MS,
};

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::parse();
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let board = Board::generate(config.cols, config.rows, &mut rng)?;
    log::info!(
        "new session: {}x{} board, {} pairs, seed {:?}",
        config.cols,
        config.rows,
        board.pair_count(),
        config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Session::new(board));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = BoardView;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = Layout::new(session.board().cols(), session.board().rows(), w, h);

        let mut fb = view.render(session.board(), session.revealed(), &layout, viewport);
        term.draw(&mut fb)?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            match map_event(&event::read()?) {
                Some(GameInput::Quit) => return Ok(()),
                Some(GameInput::Click { x, y }) => {
                    let target = layout.cell_at(x, y);
                    log::trace!("click at ({x}, {y}) -> {target:?}");

                    let shown = session.revealed().clone();
                    let effects = session.handle_click(target);
                    play_effects(term, &view, &session, shown, &effects, &layout, viewport)?;
                }
                Some(GameInput::Redraw) => term.invalidate(),
                None => {}
            }
        }

        if session.is_won() {
            return win_sequence(term, &view, &session, &layout, viewport);
        }
    }
}

/// Play back the visual effects of one click.
///
/// `shown` is the reveal grid as the player last saw it; the session has
/// already committed the outcome, and this mirror converges to it as the
/// sweeps play. Keeping the two apart is what lets a mismatched pair sit
/// face-up through the pause even though the rules already covered it.
fn play_effects(
    term: &mut TerminalRenderer,
    view: &BoardView,
    session: &Session,
    mut shown: RevealState,
    effects: &[Effect],
    layout: &Layout,
    viewport: Viewport,
) -> Result<()> {
    let board = session.board();

    for effect in effects {
        match *effect {
            Effect::Reveal(cell) => {
                for step in 0..=TILE_W {
                    let mut fb = view.render_flip(
                        board,
                        &shown,
                        layout,
                        viewport,
                        cell,
                        FlipDir::Reveal,
                        step,
                    );
                    term.draw(&mut fb)?;
                    thread::sleep(Duration::from_millis(FLIP_STEP_MS));
                }
                shown.set(cell, true);
                let mut fb = view.render(board, &shown, layout, viewport);
                term.draw(&mut fb)?;
            }
            Effect::Pause => thread::sleep(Duration::from_millis(MISMATCH_PAUSE_MS)),
            Effect::Cover(cell) => {
                for step in 0..=TILE_W {
                    let mut fb = view.render_flip(
                        board,
                        &shown,
                        layout,
                        viewport,
                        cell,
                        FlipDir::Cover,
                        step,
                    );
                    term.draw(&mut fb)?;
                    thread::sleep(Duration::from_millis(FLIP_STEP_MS));
                }
                shown.set(cell, false);
            }
        }
    }

    debug_assert_eq!(&shown, session.revealed());
    Ok(())
}

/// Fade the banner in over the finished board, linger, then end the session.
fn win_sequence(
    term: &mut TerminalRenderer,
    view: &BoardView,
    session: &Session,
    layout: &Layout,
    viewport: Viewport,
) -> Result<()> {
    log::info!("all {} pairs found", session.board().pair_count());

    for step in 0..=WIN_FADE_STEPS {
        let mut fb = view.render_win(session.board(), session.revealed(), layout, viewport, step);
        term.draw(&mut fb)?;
        thread::sleep(Duration::from_millis(WIN_STEP_MS));
    }
    thread::sleep(Duration::from_millis(WIN_LINGER_MS));
    Ok(())
}
