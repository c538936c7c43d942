//! TetrisView: maps a [`TetrisSnapshot`] into a terminal framebuffer.
//!
//! Two surfaces: the 10x20 board and a separate 6x6 preview of the next
//! piece. This module is pure (no I/O).

use crate::core::pieces::Shape;
use crate::core::snapshot::TetrisSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{
    border_style, draw_controls, draw_overlay, draw_stat, grid_dot_style, label_style,
    place_frame, AnchorY, Overlay, Rect, Viewport, PLAY_BG,
};
use crate::types::{PieceKind, RunState, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};

const PANEL_W: u16 = 2 + PREVIEW_SIZE as u16 * 2 + 2;

pub const TETRIS_CONTROLS: &str = "←→/AD move  ↑/W rotate  ↓/S drop  ENTER hard drop  SPACE pause  R restart";

/// Display colour of a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::J => Rgb::new(40, 90, 230),
        PieceKind::L => Rgb::new(120, 170, 255),
        PieceKind::O => Rgb::new(90, 230, 200),
        PieceKind::S => Rgb::new(90, 220, 100),
        PieceKind::T => Rgb::new(170, 235, 235),
        PieceKind::Z => Rgb::new(220, 70, 200),
    }
}

/// Offset that centres `shape`'s occupied cells on the preview surface.
pub fn preview_offset(shape: &Shape) -> (i8, i8) {
    let size = PREVIEW_SIZE as i8;
    match shape.bounds() {
        Some((x0, y0, x1, y1)) => {
            let w = x1 - x0 + 1;
            let h = y1 - y0 + 1;
            ((size - w) / 2 - x0, (size - h) / 2 - y0)
        }
        None => (0, 0),
    }
}

/// A lightweight terminal renderer for the tetris game.
#[derive(Debug, Clone)]
pub struct TetrisView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
    show_controls: bool,
}

impl Default for TetrisView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
            show_controls: true,
        }
    }
}

impl TetrisView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Whether to draw the one-line controls hint under the board
    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    pub fn shows_controls(&self) -> bool {
        self.show_controls
    }

    /// Screen rectangle of the bordered board
    pub fn frame(&self, viewport: Viewport) -> Rect {
        place_frame(
            viewport,
            self.anchor_y,
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
            PANEL_W,
        )
    }

    /// Screen rectangle of the bordered next-piece preview
    pub fn preview_frame(&self, viewport: Viewport) -> Rect {
        let frame = self.frame(viewport);
        Rect {
            x: frame.right().saturating_add(2),
            y: frame.y.saturating_add(1),
            w: PREVIEW_SIZE as u16 * self.cell_w + 2,
            h: PREVIEW_SIZE as u16 + 2,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &TetrisSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        fb.draw_border(frame.x, frame.y, frame.w, frame.h, border_style());

        // Locked board cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                match PieceKind::from_id(v) {
                    Some(kind) => self.draw_block(fb, frame, x as i8, y as i8, kind),
                    None => self.fill_cell(fb, frame, x as i8, y as i8, '·', grid_dot_style()),
                }
            }
        }

        if let Some(active) = snap.active {
            // Ghost piece.
            if let Some(ghost_y) = snap.ghost_y {
                let style = CellStyle::new(piece_color(active.kind), PLAY_BG).dim();
                for (x, y) in active.cells_at(ghost_y) {
                    self.fill_cell(fb, frame, x, y, '░', style);
                }
            }

            // Active piece.
            for (x, y) in active.cells() {
                self.draw_block(fb, frame, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.state {
            RunState::Paused => draw_overlay(fb, frame, &Overlay::paused(snap.score)),
            RunState::GameOver => draw_overlay(fb, frame, &Overlay::game_over(snap.score)),
            RunState::Running => {}
        }

        if self.show_controls {
            draw_controls(fb, viewport, frame.bottom(), TETRIS_CONTROLS);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &TetrisSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Rect, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), PLAY_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Rect, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &TetrisSnapshot, viewport: Viewport, frame: Rect) {
        let preview = self.preview_frame(viewport);
        if preview.x >= viewport.width || viewport.width - preview.x < preview.w {
            return;
        }

        fb.put_str(preview.x, frame.y, "NEXT", label_style());
        fb.draw_border(preview.x, preview.y, preview.w, preview.h, border_style());
        fb.fill_rect(
            preview.x + 1,
            preview.y + 1,
            preview.w - 2,
            preview.h - 2,
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );

        let shape = Shape::of(snap.next);
        let (ox, oy) = preview_offset(&shape);
        let style = CellStyle::new(piece_color(snap.next), PLAY_BG).bold();
        for (dx, dy) in shape.occupied() {
            let px = preview.x + 1 + (ox + dx) as u16 * self.cell_w;
            let py = preview.y + 1 + (oy + dy) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }

        let mut y = preview.bottom().saturating_add(1);
        y = draw_stat(fb, preview.x, y, "SCORE", snap.score);
        y = draw_stat(fb, preview.x, y, "LEVEL", snap.level);
        y = draw_stat(fb, preview.x, y, "LINES", snap.lines);
        draw_stat(fb, preview.x, y, "HIGH", snap.high_score);
    }
}
