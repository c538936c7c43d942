//! Tetris module - falling-block game state
//!
//! Ties together the board, piece matrices, randomness and scoring. A piece
//! falls one row per tick; when it cannot fall further it locks, full rows are
//! cleared and the queued next piece spawns. A spawn that collides ends the game.

use crate::board::Board;
use crate::pieces::{Piece, Shape};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{level_for_score, line_clear_points, tetris_tick_ms};
use crate::snapshot::{ActiveSnapshot, TetrisSnapshot};
use crate::types::{
    PieceKind, RunState, TetrisIntent, TetrisLockEvent, SPAWN_POSITION, TETRIS_INITIAL_TICK_MS,
};

/// Complete tetris game state
#[derive(Debug, Clone)]
pub struct TetrisGame<R = SimpleRng> {
    board: Board,
    current: Piece,
    next: PieceKind,
    /// Shape origin (top-left of the matrix) in board coordinates.
    x: i8,
    y: i8,
    score: u32,
    level: u32,
    lines: u32,
    high_score: u32,
    tick_ms: u32,
    state: RunState,
    /// Last lock event (consumed by observers).
    last_event: Option<TetrisLockEvent>,
    rng: R,
}

impl TetrisGame<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> TetrisGame<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self {
            board: Board::new(),
            current: Piece::new(PieceKind::I),
            next: PieceKind::I,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
            score: 0,
            level: 1,
            lines: 0,
            high_score: 0,
            tick_ms: TETRIS_INITIAL_TICK_MS,
            state: RunState::Running,
            last_event: None,
            rng,
        };
        game.reset();
        game
    }

    /// Empty the board and start over. High score is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.tick_ms = TETRIS_INITIAL_TICK_MS;
        self.state = RunState::Running;
        self.last_event = None;
        self.next = self.draw_kind();
        self.spawn_next();
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The falling piece, or `None` after game over
    pub fn current(&self) -> Option<&Piece> {
        match self.state {
            RunState::GameOver => None,
            _ => Some(&self.current),
        }
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Shape origin of the falling piece
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current gravity interval in milliseconds
    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<TetrisLockEvent> {
        self.last_event.take()
    }

    /// Replace the falling piece and move it to the spawn origin.
    ///
    /// Does not check for collision; the next tick or move will.
    pub fn set_current(&mut self, kind: PieceKind) {
        self.current = Piece::new(kind);
        self.x = SPAWN_POSITION.0;
        self.y = SPAWN_POSITION.1;
    }

    /// Replace the queued next piece
    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = kind;
    }

    fn draw_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_below(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Promote the queued piece to the spawn origin and draw a new one.
    /// Returns false (and ends the game) if the spawned piece collides.
    fn spawn_next(&mut self) -> bool {
        let kind = self.next;
        self.next = self.draw_kind();
        self.set_current(kind);

        if self.board.collides(&self.current.shape, self.x, self.y) {
            self.state = RunState::GameOver;
            return false;
        }
        true
    }

    fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        !self.board.collides(shape, x, y)
    }

    /// Try to move the falling piece. On collision nothing changes.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        if !self.fits(&self.current.shape, self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate the falling piece 90° clockwise in place.
    ///
    /// No offset search: if the rotated matrix collides the rotation is discarded.
    pub fn rotate(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        let rotated = self.current.shape.rotated();
        if !self.fits(&rotated, self.x, self.y) {
            return false;
        }
        self.current.shape = rotated;
        true
    }

    /// Landing row of the falling piece. Pure; never mutates position or board.
    pub fn ghost_y(&self) -> Option<i8> {
        if self.state == RunState::GameOver {
            return None;
        }
        let shape = &self.current.shape;
        let mut y = self.y;
        while self.fits(shape, self.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Drop straight to the landing row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        if let Some(y) = self.ghost_y() {
            self.y = y;
        }
        self.lock();
        true
    }

    /// Merge the falling piece, clear rows, score, and spawn the next piece
    fn lock(&mut self) {
        let kind = self.current.kind;
        self.board
            .merge(&self.current.shape, kind, self.x, self.y);

        let cleared = self.board.clear_full_rows().len();
        let points = line_clear_points(cleared, self.level);
        self.lines += cleared as u32;
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);

        let level = level_for_score(self.score);
        if level > self.level {
            self.level = level;
            self.tick_ms = tetris_tick_ms(level);
        }

        let spawned = self.spawn_next();
        self.last_event = Some(TetrisLockEvent {
            kind,
            lines_cleared: cleared as u32,
            points,
            level: self.level,
            topped_out: !spawned,
        });
    }

    /// Advance gravity by one row, locking the piece if it cannot fall
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock();
        }
        true
    }

    /// Flip between Running and Paused; no-op after game over
    pub fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::GameOver => return false,
        };
        true
    }

    /// Apply a player intent. Returns whether anything observable changed.
    pub fn apply(&mut self, intent: TetrisIntent) -> bool {
        match intent {
            TetrisIntent::MoveLeft => self.try_move(-1, 0),
            TetrisIntent::MoveRight => self.try_move(1, 0),
            TetrisIntent::SoftDrop => self.try_move(0, 1),
            TetrisIntent::Rotate => self.rotate(),
            TetrisIntent::HardDrop => self.hard_drop(),
            TetrisIntent::TogglePause => self.toggle_pause(),
            TetrisIntent::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut TetrisSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.current().map(|piece| ActiveSnapshot {
            kind: piece.kind,
            shape: piece.shape,
            x: self.x,
            y: self.y,
        });
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.high_score = self.high_score;
        out.tick_ms = self.tick_ms;
        out.state = self.state;
    }

    pub fn snapshot(&self) -> TetrisSnapshot {
        let mut s = TetrisSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for TetrisGame<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
