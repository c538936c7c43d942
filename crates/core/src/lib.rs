//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules, state and simulation of both games.
//! It has **zero dependencies** on terminals, timers or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted [`rng::SequenceRng`]) produces identical games
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Runs headless, in a terminal, or in a benchmark
//!
//! # Module Structure
//!
//! - [`snake`]: 20x20 grid-movement game with growth, food and speed-up
//! - [`board`]: 10x20 playfield with collision detection and line clearing
//! - [`pieces`]: Tetromino shape matrices and clockwise rotation
//! - [`tetris`]: Falling-block game: spawn, move, rotate, lock, score
//! - [`scoring`]: Line clear table, level and tick interval formulas
//! - [`rng`]: Swappable randomness for food placement and piece selection
//! - [`snapshot`]: Read-only frames consumed by views and observers
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{SnakeGame, TetrisGame};
//! use tui_arcade_types::{Direction, RunState, SnakeIntent, TetrisIntent};
//!
//! let mut snake = SnakeGame::new(12345);
//! snake.apply(SnakeIntent::Turn(Direction::Up));
//! snake.tick();
//! assert_eq!(snake.head().y, 9);
//! assert!(!snake.game_over());
//!
//! let mut tetris = TetrisGame::new(12345);
//! tetris.apply(TetrisIntent::HardDrop);
//! assert_eq!(tetris.state(), RunState::Running);
//! ```
//!
//! # Timing
//!
//! Neither game reads a clock. Each exposes its current interval
//! (`tick_ms`) and advances exactly one step per `tick()` call; the host owns
//! the timer.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;
pub mod tetris;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, U8Grid};
pub use pieces::{Piece, Shape};
pub use rng::{RandRng, RandomSource, SequenceRng, SimpleRng};
pub use scoring::{level_for_score, line_clear_points, tetris_tick_ms};
pub use snake::{Position, SnakeGame};
pub use snapshot::{ActiveSnapshot, Fingerprint, SnakeSnapshot, TetrisSnapshot};
pub use tetris::TetrisGame;
