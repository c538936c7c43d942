//! Snapshot module - read-only frames of game state for views and observers
//!
//! Views never touch a live game; they render one of these. Each snapshot can
//! produce a stable 64-bit fingerprint so hosts can skip redundant redraws.

use std::hash::{Hash, Hasher};

use crate::board::U8Grid;
use crate::pieces::Shape;
use crate::snake::Position;
use crate::types::{
    Direction, PieceKind, RunState, BOARD_HEIGHT, BOARD_WIDTH, SNAKE_INITIAL_TICK_MS,
    TETRIS_INITIAL_TICK_MS,
};

/// Stable 64-bit FNV-1a hasher.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Stable digest of everything a view can observe.
pub trait Fingerprint {
    fn fingerprint(&self) -> u64;
}

fn fnv1a_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = Fnv1aHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl Fingerprint for SnakeSnapshot {
    fn fingerprint(&self) -> u64 {
        fnv1a_of(self)
    }
}

impl Fingerprint for TetrisSnapshot {
    fn fingerprint(&self) -> u64 {
        fnv1a_of(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnakeSnapshot {
    /// Head first.
    pub actor: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub tick_ms: u32,
    pub state: RunState,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.actor.first().copied()
    }
}

impl Default for SnakeSnapshot {
    fn default() -> Self {
        Self {
            actor: Vec::new(),
            food: None,
            direction: Direction::Right,
            score: 0,
            high_score: 0,
            tick_ms: SNAKE_INITIAL_TICK_MS,
            state: RunState::Running,
        }
    }
}

/// The falling piece as it should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board cells covered by the piece at row `y`, skipping cells above the board
    pub fn cells_at(&self, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        let x = self.x;
        self.shape
            .occupied()
            .map(move |(dx, dy)| (x + dx, y + dy))
            .filter(|&(_, py)| py >= 0)
    }

    /// Board cells covered by the piece at its own position
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells_at(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TetrisSnapshot {
    pub board: U8Grid,
    /// `None` once the game is over.
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub high_score: u32,
    pub tick_ms: u32,
    pub state: RunState,
}

impl TetrisSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.next = PieceKind::I;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.high_score = 0;
        self.tick_ms = TETRIS_INITIAL_TICK_MS;
        self.state = RunState::Running;
    }

    pub fn playable(&self) -> bool {
        self.state == RunState::Running
    }
}

impl Default for TetrisSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            score: 0,
            level: 1,
            lines: 0,
            high_score: 0,
            tick_ms: TETRIS_INITIAL_TICK_MS,
            state: RunState::Running,
        };
        s.clear();
        s
    }
}
