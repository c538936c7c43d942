//! Terminal input crate (engine-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`SnakeIntent`](crate::types::SnakeIntent) /
//! [`TetrisIntent`](crate::types::TetrisIntent) values and decides which keys
//! quit the host. Every key that maps to an intent is captured by the game.

pub mod map;

pub use tui_arcade_types as types;

pub use map::{route, should_quit, snake_intent, tetris_intent, KeyRoute};
