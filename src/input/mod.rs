//! Event mapping from terminal events to game inputs.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::types::GameInput;

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a terminal event to a game input.
///
/// The game only reacts to left-button releases (the click), quit keys and
/// resizes; everything else, including mouse motion and button presses, is
/// dropped here.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            should_quit(*key).then_some(GameInput::Quit)
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
            Some(GameInput::Click {
                x: mouse.column,
                y: mouse.row,
            })
        }
        Event::Resize(_, _) => Some(GameInput::Redraw),
        _ => None,
    }
}
