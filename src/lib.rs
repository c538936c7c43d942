//! TUI Arcade (workspace facade crate).
//!
//! Terminal renditions of two fixed-tick games, Snake and Tetris. The
//! implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_arcade::{core,engine,input,journal,term,types}`
//! and owns the binary's configuration and session journaling.

pub mod config;
pub mod recorder;

pub use tui_arcade_core as core;
pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_journal as journal;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
