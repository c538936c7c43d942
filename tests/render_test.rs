//! Snapshots from live games rendered through the terminal views

use std::time::{Duration, Instant};

use tui_arcade::core::{Position, SequenceRng, SnakeGame, TetrisGame};
use tui_arcade::core::snapshot::Fingerprint;
use tui_arcade::term::{AnchorY, FrameBuffer, RenderThrottle, SnakeView, TetrisView, Viewport};
use tui_arcade::types::{Direction, PieceKind, SnakeIntent, TetrisIntent};

fn viewport() -> Viewport {
    Viewport::new(80, 30)
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_snake_cells_are_two_columns_wide() {
    let game = SnakeGame::from_layout(
        [Position::new(0, 0), Position::new(0, 1)],
        Direction::Up,
        Some(Position::new(5, 5)),
        SequenceRng::new(vec![0]),
    );
    let view = SnakeView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.snapshot(), viewport());
    let frame = view.frame(viewport());

    let (hx, hy) = view.cell_origin(frame, Position::new(0, 0)).expect("on grid");
    assert_eq!((hx, hy), (frame.x + 1, frame.y + 1));
    assert_eq!(fb.get(hx, hy).map(|c| c.ch), Some('█'));
    assert_eq!(fb.get(hx + 1, hy).map(|c| c.ch), Some('█'));

    let (fx, fy) = view.cell_origin(frame, Position::new(5, 5)).expect("on grid");
    assert_eq!(fb.get(fx, fy).map(|c| c.ch), Some('●'));
    assert_eq!(fb.get(fx + 1, fy).map(|c| c.ch), Some('●'));

    // Head and body use different colours.
    let head = fb.get(hx, hy).map(|c| c.style.fg);
    let (bx, by) = view.cell_origin(frame, Position::new(0, 1)).expect("on grid");
    let body = fb.get(bx, by).map(|c| c.style.fg);
    assert_ne!(head, body);
}

#[test]
fn test_snake_overlays() {
    let mut game = SnakeGame::new(3);
    let view = SnakeView::default();

    game.apply(SnakeIntent::TogglePause);
    let paused = screen_text(&view.render(&game.snapshot(), viewport()));
    assert!(paused.contains("PAUSED"));

    game.apply(SnakeIntent::TogglePause);
    let running = screen_text(&view.render(&game.snapshot(), viewport()));
    assert!(!running.contains("PAUSED"));
    assert!(running.contains("SCORE"));
}

#[test]
fn test_controls_hint_can_be_hidden() {
    let snap = TetrisGame::new(1).snapshot();
    let shown = screen_text(&TetrisView::default().render(&snap, viewport()));
    let hidden = screen_text(&TetrisView::default().with_controls(false).render(&snap, viewport()));
    assert!(shown.contains("ENTER hard drop"));
    assert!(!hidden.contains("ENTER hard drop"));
}

#[test]
fn test_tetris_locked_and_ghost_cells() {
    let mut game = TetrisGame::new(1);
    game.set_current(PieceKind::O);
    game.set_next(PieceKind::O);
    game.hard_drop();
    // The spawned O shows its ghost on top of the locked one.
    let view = TetrisView::default();
    let fb = view.render(&game.snapshot(), viewport());
    let frame = view.frame(viewport());

    let cell = |x: u16, y: u16| fb.get(frame.x + 1 + x * 2, frame.y + 1 + y).map(|c| c.ch);
    assert_eq!(cell(3, 19), Some('█'));
    assert_eq!(cell(4, 18), Some('█'));
    assert_eq!(cell(3, 17), Some('░'));
    assert_eq!(cell(4, 16), Some('░'));
    assert_eq!(cell(3, 0), Some('█'));
    assert_eq!(cell(0, 19), Some('·'));
}

#[test]
fn test_tetris_preview_and_game_over() {
    let mut game = TetrisGame::new(1);
    for x in 3..7 {
        game.board_mut().set(x, 2, Some(PieceKind::J));
    }
    game.set_current(PieceKind::O);
    game.set_next(PieceKind::T);

    let view = TetrisView::default();
    let before = screen_text(&view.render(&game.snapshot(), viewport()));
    assert!(before.contains("NEXT"));
    assert!(!before.contains("GAME OVER"));

    game.apply(TetrisIntent::HardDrop);
    let after = screen_text(&view.render(&game.snapshot(), viewport()));
    assert!(after.contains("GAME OVER"));
    assert!(after.contains("Press R to restart"));
}

#[test]
fn test_throttle_skips_unchanged_frames() {
    let t0 = Instant::now();
    let mut throttle = RenderThrottle::new(Duration::from_millis(500));
    let mut game = TetrisGame::new(1);

    assert!(throttle.should_render(t0, game.snapshot().fingerprint()));
    assert!(!throttle.should_render(t0 + Duration::from_millis(10), game.snapshot().fingerprint()));

    game.tick();
    assert!(throttle.should_render(t0 + Duration::from_millis(20), game.snapshot().fingerprint()));

    // Heartbeat redraw while nothing changes.
    assert!(throttle.should_render(t0 + Duration::from_millis(520), game.snapshot().fingerprint()));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let snake = SnakeGame::new(1).snapshot();
    let tetris = TetrisGame::new(1).snapshot();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (30, 12)] {
        let vp = Viewport::new(w, h);
        let a = SnakeView::default().render(&snake, vp);
        let b = TetrisView::default().render(&tetris, vp);
        assert_eq!((a.width(), a.height()), (w, h));
        assert_eq!((b.width(), b.height()), (w, h));
    }
}
