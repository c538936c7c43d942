//! Terminal "game renderer" crate.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout frameworks and renders snapshots into a simple framebuffer
//! that is flushed to the terminal with crossterm.
//!
//! - [`fb`]: styled character framebuffer
//! - [`SnakeView`] / [`TetrisView`]: pure snapshot → framebuffer mappers
//! - [`RenderThrottle`]: skips frames whose snapshot fingerprint is unchanged
//! - [`TerminalRenderer`]: raw mode, alternate screen, full and diff flushing
//!
//! Board cells are drawn 2 columns wide to compensate for typical terminal
//! glyph aspect ratio.

pub mod fb;
pub mod layout;
pub mod render_throttle;
pub mod renderer;
pub mod snake_view;
pub mod tetris_view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use layout::{AnchorY, Overlay, Rect, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::SnakeView;
pub use tetris_view::{piece_color, preview_offset, TetrisView};
