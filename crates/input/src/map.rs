//! Key mapping from terminal events to game intents.
//!
//! | action | Snake | Tetris |
//! |--------|-------|--------|
//! | up | Up, W | Up, W (rotate) |
//! | down | Down, S | Down, S (soft drop) |
//! | left | Left, A | Left, A |
//! | right | Right, D | Right, D |
//! | hard drop | - | Enter |
//! | pause | Space | Space |
//! | reset | R | R |
//! | quit | Q, Esc, Ctrl-C | Q, Esc, Ctrl-C |

use crate::types::{Direction, SnakeIntent, TetrisIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the host should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute<I> {
    /// Leave the game.
    Quit,
    /// Captured by the engine; never forwarded to the host.
    Intent(I),
    /// Not a game key.
    Passthrough,
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map keyboard input to a snake intent.
pub fn snake_intent(key: KeyEvent) -> Option<SnakeIntent> {
    if is_ctrl(&key) {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(SnakeIntent::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SnakeIntent::Reset),
        code => direction_for(code).map(SnakeIntent::Turn),
    }
}

/// Map keyboard input to a tetris intent.
pub fn tetris_intent(key: KeyEvent) -> Option<TetrisIntent> {
    if is_ctrl(&key) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(TetrisIntent::HardDrop),
        KeyCode::Char(' ') => Some(TetrisIntent::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TetrisIntent::Reset),
        code => direction_for(code).map(|d| match d {
            Direction::Up => TetrisIntent::Rotate,
            Direction::Down => TetrisIntent::SoftDrop,
            Direction::Left => TetrisIntent::MoveLeft,
            Direction::Right => TetrisIntent::MoveRight,
        }),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) && is_ctrl(&key))
}

/// Route a key event through `map`.
///
/// Releases are ignored; presses and terminal auto-repeat both count.
pub fn route<I>(key: KeyEvent, map: impl FnOnce(KeyEvent) -> Option<I>) -> KeyRoute<I> {
    if key.kind == KeyEventKind::Release {
        return KeyRoute::Passthrough;
    }
    if should_quit(key) {
        return KeyRoute::Quit;
    }
    match map(key) {
        Some(intent) => KeyRoute::Intent(intent),
        None => KeyRoute::Passthrough,
    }
}
