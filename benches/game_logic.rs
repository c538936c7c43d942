use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_arcade::core::{Board, Position, SequenceRng, SnakeGame, TetrisGame};
use tui_arcade::term::{FrameBuffer, TetrisView, Viewport};
use tui_arcade::types::{Direction, PieceKind, SnakeIntent, SNAKE_GRID_SIZE};

fn bench_snake_tick(c: &mut Criterion) {
    c.bench_function("snake_tick", |b| {
        let mut game = SnakeGame::new(12345);
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        let mut i = 0usize;
        b.iter(|| {
            if game.game_over() {
                game.apply(SnakeIntent::Reset);
            }
            if i % 5 == 0 {
                game.apply(SnakeIntent::Turn(turns[(i / 5) % 4]));
            }
            i += 1;
            black_box(game.tick());
        })
    });
}

fn bench_food_spawn_crowded(c: &mut Criterion) {
    // Actor fills all rows but the last; the food respawns on row 19.
    let mut actor = Vec::new();
    for y in 0..SNAKE_GRID_SIZE - 1 {
        if y % 2 == 0 {
            actor.extend((0..SNAKE_GRID_SIZE).rev().map(|x| Position::new(x, y)));
        } else {
            actor.extend((0..SNAKE_GRID_SIZE).map(|x| Position::new(x, y)));
        }
    }
    actor.reverse();
    let head = actor[0];

    c.bench_function("snake_eat_crowded_grid", |b| {
        b.iter(|| {
            let mut game = SnakeGame::from_layout(
                actor.iter().copied(),
                Direction::Down,
                Some(head.step(Direction::Down)),
                SequenceRng::new(vec![7, 3]),
            );
            black_box(game.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("tetris_hard_drop", |b| {
        let mut game = TetrisGame::new(12345);
        b.iter(|| {
            if game.game_over() {
                game.reset();
            }
            black_box(game.hard_drop());
        })
    });
}

fn bench_tetris_render(c: &mut Criterion) {
    let game = TetrisGame::new(12345);
    let snap = game.snapshot();
    let view = TetrisView::default();
    let vp = Viewport::new(80, 30);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("tetris_render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_snake_tick,
    bench_food_spawn_crowded,
    bench_line_clear,
    bench_hard_drop,
    bench_tetris_render
);
criterion_main!(benches);
