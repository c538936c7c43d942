//! Key routing from crossterm events to game intents

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_arcade::input::{route, snake_intent, tetris_intent, KeyRoute};
use tui_arcade::types::{Direction, SnakeIntent, TetrisIntent};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

#[test]
fn test_snake_routes() {
    assert_eq!(
        route(press(KeyCode::Char('w')), snake_intent),
        KeyRoute::Intent(SnakeIntent::Turn(Direction::Up))
    );
    assert_eq!(
        route(press(KeyCode::Left), snake_intent),
        KeyRoute::Intent(SnakeIntent::Turn(Direction::Left))
    );
    assert_eq!(
        route(press(KeyCode::Char(' ')), snake_intent),
        KeyRoute::Intent(SnakeIntent::TogglePause)
    );
    assert_eq!(
        route(press(KeyCode::Char('R')), snake_intent),
        KeyRoute::Intent(SnakeIntent::Reset)
    );
    assert_eq!(route(press(KeyCode::Enter), snake_intent), KeyRoute::Passthrough);
    assert_eq!(route(press(KeyCode::Tab), snake_intent), KeyRoute::Passthrough);
}

#[test]
fn test_tetris_routes() {
    let cases = [
        (KeyCode::Left, TetrisIntent::MoveLeft),
        (KeyCode::Char('a'), TetrisIntent::MoveLeft),
        (KeyCode::Right, TetrisIntent::MoveRight),
        (KeyCode::Char('D'), TetrisIntent::MoveRight),
        (KeyCode::Down, TetrisIntent::SoftDrop),
        (KeyCode::Char('s'), TetrisIntent::SoftDrop),
        (KeyCode::Up, TetrisIntent::Rotate),
        (KeyCode::Char('W'), TetrisIntent::Rotate),
        (KeyCode::Enter, TetrisIntent::HardDrop),
        (KeyCode::Char(' '), TetrisIntent::TogglePause),
        (KeyCode::Char('r'), TetrisIntent::Reset),
    ];
    for (code, intent) in cases {
        assert_eq!(route(press(code), tetris_intent), KeyRoute::Intent(intent), "{:?}", code);
    }
}

#[test]
fn test_quit_keys_win_over_mapping() {
    for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
        assert_eq!(route(press(code), snake_intent), KeyRoute::Quit);
        assert_eq!(route(press(code), tetris_intent), KeyRoute::Quit);
    }

    let ctrl_c = KeyEvent::new_with_kind(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
        KeyEventKind::Press,
    );
    assert_eq!(route(ctrl_c, tetris_intent), KeyRoute::Quit);
}

#[test]
fn test_control_chords_are_not_game_keys() {
    let ctrl_r = KeyEvent::new_with_kind(
        KeyCode::Char('r'),
        KeyModifiers::CONTROL,
        KeyEventKind::Press,
    );
    assert_eq!(route(ctrl_r, snake_intent), KeyRoute::Passthrough);
}

#[test]
fn test_release_ignored_repeat_accepted() {
    let release = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(route(release, tetris_intent), KeyRoute::Passthrough);

    let quit_release =
        KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(route(quit_release, tetris_intent), KeyRoute::Passthrough);

    let repeat = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(
        route(repeat, tetris_intent),
        KeyRoute::Intent(TetrisIntent::MoveLeft)
    );
}
