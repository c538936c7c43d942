//! SnakeView: maps a [`SnakeSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snake::Position;
use crate::core::snapshot::SnakeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{
    border_style, draw_controls, draw_overlay, draw_stat, grid_dot_style, place_frame, AnchorY,
    Overlay, Rect, Viewport, PLAY_BG,
};
use crate::types::{RunState, SNAKE_GRID_SIZE};

const PANEL_W: u16 = 14;

const HEAD: Rgb = Rgb::new(120, 255, 120);
const BODY_NEAR: Rgb = Rgb::new(60, 210, 90);
const BODY_FAR: Rgb = Rgb::new(20, 110, 60);
const FOOD: Rgb = Rgb::new(235, 70, 70);

pub const SNAKE_CONTROLS: &str = "←↑→↓/WASD move  SPACE pause  R restart  Q quit";

/// Terminal renderer for the snake game.
#[derive(Debug, Clone)]
pub struct SnakeView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
    show_controls: bool,
}

impl Default for SnakeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
            show_controls: true,
        }
    }
}

impl SnakeView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Whether to draw the one-line controls hint under the grid
    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    pub fn shows_controls(&self) -> bool {
        self.show_controls
    }

    /// Screen rectangle of the bordered grid for a viewport
    pub fn frame(&self, viewport: Viewport) -> Rect {
        let grid = SNAKE_GRID_SIZE as u16;
        place_frame(viewport, self.anchor_y, grid * self.cell_w + 2, grid + 2, PANEL_W)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &SnakeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        fb.draw_border(frame.x, frame.y, frame.w, frame.h, border_style());

        for y in 0..SNAKE_GRID_SIZE {
            for x in 0..SNAKE_GRID_SIZE {
                self.fill_cell(fb, frame, Position::new(x, y), '·', grid_dot_style());
            }
        }

        if let Some(food) = snap.food {
            let style = CellStyle::new(FOOD, PLAY_BG).bold();
            self.fill_cell(fb, frame, food, '●', style);
        }

        // Tail first so the head is never painted over.
        let len = snap.actor.len();
        for (i, &segment) in snap.actor.iter().enumerate().rev() {
            let style = if i == 0 {
                CellStyle::new(HEAD, PLAY_BG).bold()
            } else {
                let t = if len > 2 {
                    (i - 1) as f32 / (len - 2) as f32
                } else {
                    0.0
                };
                CellStyle::new(BODY_NEAR.lerp(BODY_FAR, t), PLAY_BG)
            };
            self.fill_cell(fb, frame, segment, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.state {
            RunState::Paused => draw_overlay(fb, frame, &Overlay::paused(snap.score)),
            RunState::GameOver => draw_overlay(fb, frame, &Overlay::game_over(snap.score)),
            RunState::Running => {}
        }

        if self.show_controls {
            draw_controls(fb, viewport, frame.bottom(), SNAKE_CONTROLS);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SnakeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of a grid cell, if it lies on the grid
    pub fn cell_origin(&self, frame: Rect, pos: Position) -> Option<(u16, u16)> {
        if !pos.in_bounds() {
            return None;
        }
        Some((
            frame.x + 1 + pos.x as u16 * self.cell_w,
            frame.y + 1 + pos.y as u16,
        ))
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Rect, pos: Position, ch: char, style: CellStyle) {
        if let Some((px, py)) = self.cell_origin(frame, pos) {
            fb.fill_rect(px, py, self.cell_w, 1, ch, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &SnakeSnapshot, viewport: Viewport, frame: Rect) {
        let panel_x = frame.right().saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let mut y = frame.y;
        y = draw_stat(fb, panel_x, y, "SCORE", snap.score);
        y = draw_stat(fb, panel_x, y, "HIGH", snap.high_score);
        y = draw_stat(fb, panel_x, y, "LENGTH", snap.actor.len() as u32);
        draw_stat(fb, panel_x, y, "TICK MS", snap.tick_ms);
    }
}
