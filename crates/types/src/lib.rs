//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both games.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping, journaling).
//!
//! # Snake Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SNAKE_GRID_SIZE` | 20 | Square grid edge in cells |
//! | `SNAKE_INITIAL_TICK_MS` | 150 | Movement interval at game start |
//! | `SNAKE_TICK_DECREMENT_MS` | 5 | Interval reduction per food eaten |
//! | `SNAKE_MIN_TICK_MS` | 50 | Interval floor |
//! | `SNAKE_FOOD_REWARD` | 10 | Points per food |
//!
//! # Tetris Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns (indexed 0-9) |
//! | `BOARD_HEIGHT` | 20 | Rows (indexed 0-19) |
//! | `SPAWN_POSITION` | (3, 0) | Shape origin for new pieces |
//! | `TETRIS_INITIAL_TICK_MS` | 800 | Gravity interval at level 1 |
//! | `TETRIS_TICK_DECREMENT_MS` | 50 | Interval reduction per level |
//! | `TETRIS_MIN_TICK_MS` | 100 | Interval floor |
//! | `LEVEL_SCORE_STEP` | 1000 | Points per level |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, PieceKind, TetrisIntent, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse a piece kind (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Piece ids are 1-based and stable
//! assert_eq!(PieceKind::I.id(), 1);
//! assert_eq!(PieceKind::from_id(7), Some(PieceKind::Z));
//!
//! // Directions know their opposite
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Intents have stable names for the journal
//! assert_eq!(TetrisIntent::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Snake grid edge length in cells (20x20)
pub const SNAKE_GRID_SIZE: i16 = 20;

/// Snake head position at game start
pub const SNAKE_START: (i16, i16) = (10, 10);

/// Snake movement interval at game start (150ms)
pub const SNAKE_INITIAL_TICK_MS: u32 = 150;

/// Interval reduction applied each time food is eaten (5ms)
pub const SNAKE_TICK_DECREMENT_MS: u32 = 5;

/// Fastest snake movement interval (50ms)
pub const SNAKE_MIN_TICK_MS: u32 = 50;

/// Points awarded per food eaten
pub const SNAKE_FOOD_REWARD: u32 = 10;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn origin (x, y) of a new piece's shape matrix
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Gravity interval at level 1 (800ms per row)
pub const TETRIS_INITIAL_TICK_MS: u32 = 800;

/// Gravity interval reduction per level gained (50ms)
pub const TETRIS_TICK_DECREMENT_MS: u32 = 50;

/// Fastest gravity interval (100ms)
pub const TETRIS_MIN_TICK_MS: u32 = 100;

/// Points needed per level
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Edge of the square next-piece preview surface, in cells
pub const PREVIEW_SIZE: u8 = 6;

/// Line clear scoring table
///
/// Base points for clearing N lines at once, multiplied by the current
/// (1-based) level:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(SNAKE_INITIAL_TICK_MS, 150);
        assert_eq!(SNAKE_TICK_DECREMENT_MS, 5);
        assert_eq!(SNAKE_MIN_TICK_MS, 50);

        assert_eq!(TETRIS_INITIAL_TICK_MS, 800);
        assert_eq!(TETRIS_TICK_DECREMENT_MS, 50);
        assert_eq!(TETRIS_MIN_TICK_MS, 100);
    }

    #[test]
    fn piece_ids_round_trip_through_all_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PieceKind::from_id(0), None);
        assert_eq!(PieceKind::from_id(8), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn game_kind_parses_names() {
        assert_eq!(GameKind::from_str("Snake"), Some(GameKind::Snake));
        assert_eq!(GameKind::from_str("tetris"), Some(GameKind::Tetris));
        assert_eq!(GameKind::from_str("pong"), None);
    }
}

/// Lifecycle state shared by both engines
///
/// ```text
/// Running --pause--> Paused --resume--> Running
/// Running --collision--> GameOver --reset--> Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::GameOver => "gameOver",
        }
    }
}

/// Which engine the host mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameKind {
    #[default]
    Snake,
    Tetris,
}

impl GameKind {
    /// Parse game kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "tetris" => Some(GameKind::Tetris),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Tetris => "tetris",
        }
    }
}

/// Cardinal direction of snake movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit (dx, dy) delta; y grows downward
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// The seven tetromino piece kinds
///
/// Each kind has a stable 1-based id, which is the value stored in locked
/// board cells (`0` means empty):
/// - **I** (1): Cyan, 4-wide bar
/// - **J** (2): Blue
/// - **L** (3): Light blue (mirror of J)
/// - **O** (4): Aqua, 2x2 square
/// - **S** (5): Green
/// - **T** (6): Pale cyan
/// - **Z** (7): Magenta (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Board cell value for this kind (1..=7)
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]; `0` and out-of-range values yield `None`
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Player intents accepted by the snake engine
///
/// Produced by the input layer; the engine decides whether each intent is
/// valid in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeIntent {
    /// Request a new heading (rejected if it reverses the snake)
    Turn(Direction),
    /// Toggle Running/Paused
    TogglePause,
    /// Start over from any state
    Reset,
}

impl SnakeIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnakeIntent::Turn(Direction::Up) => "turnUp",
            SnakeIntent::Turn(Direction::Down) => "turnDown",
            SnakeIntent::Turn(Direction::Left) => "turnLeft",
            SnakeIntent::Turn(Direction::Right) => "turnRight",
            SnakeIntent::TogglePause => "pause",
            SnakeIntent::Reset => "reset",
        }
    }
}

/// Player intents accepted by the tetris engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisIntent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate the shape matrix 90° clockwise, no wall kicks
    Rotate,
    /// Drop to the landing row and lock immediately
    HardDrop,
    /// Toggle Running/Paused
    TogglePause,
    /// Start over from any state
    Reset,
}

impl TetrisIntent {
    /// Parse intent from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::TetrisIntent;
    ///
    /// assert_eq!(TetrisIntent::from_str("moveLeft"), Some(TetrisIntent::MoveLeft));
    /// assert_eq!(TetrisIntent::from_str("hardDrop"), Some(TetrisIntent::HardDrop));
    /// assert_eq!(TetrisIntent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(TetrisIntent::MoveLeft),
            "moveright" => Some(TetrisIntent::MoveRight),
            "softdrop" => Some(TetrisIntent::SoftDrop),
            "rotate" => Some(TetrisIntent::Rotate),
            "harddrop" => Some(TetrisIntent::HardDrop),
            "pause" => Some(TetrisIntent::TogglePause),
            "reset" => Some(TetrisIntent::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TetrisIntent::MoveLeft => "moveLeft",
            TetrisIntent::MoveRight => "moveRight",
            TetrisIntent::SoftDrop => "softDrop",
            TetrisIntent::Rotate => "rotate",
            TetrisIntent::HardDrop => "hardDrop",
            TetrisIntent::TogglePause => "pause",
            TetrisIntent::Reset => "reset",
        }
    }
}

/// Event emitted by the snake engine after a tick with a notable outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    AteFood { score: u32, length: u32, tick_ms: u32 },
    Collided { score: u32, length: u32 },
}

/// Event emitted by the tetris engine after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrisLockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub level: u32,
    /// Set when the piece that followed could not spawn.
    pub topped_out: bool,
}
