//! Shared placement and overlay helpers for the game views.

use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen rectangle, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

pub(crate) const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
pub(crate) const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

pub(crate) fn border_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG)
}

pub(crate) fn label_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold()
}

pub(crate) fn value_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG)
}

pub(crate) fn grid_dot_style() -> CellStyle {
    CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim()
}

/// Place a `frame_w` x `frame_h` frame horizontally centred, leaving
/// `extra_w` columns to its right for a side panel.
pub(crate) fn place_frame(
    viewport: Viewport,
    anchor_y: AnchorY,
    frame_w: u16,
    frame_h: u16,
    extra_w: u16,
) -> Rect {
    let total_w = frame_w.saturating_add(extra_w);
    let x = viewport.width.saturating_sub(total_w) / 2;
    let y = match anchor_y {
        AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
        AnchorY::Top => 0,
    };
    Rect {
        x,
        y,
        w: frame_w,
        h: frame_h,
    }
}

/// Text lines for a Paused / GameOver overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub score: u32,
    pub hint: &'static str,
}

impl Overlay {
    pub fn paused(score: u32) -> Self {
        Self {
            title: "PAUSED",
            score,
            hint: "Space to resume",
        }
    }

    pub fn game_over(score: u32) -> Self {
        Self {
            title: "GAME OVER",
            score,
            hint: "Press R to restart",
        }
    }
}

/// Draw an overlay box centred on `frame`.
pub(crate) fn draw_overlay(fb: &mut FrameBuffer, frame: Rect, overlay: &Overlay) {
    let text_w = overlay.hint.chars().count().max(overlay.title.chars().count()) as u16;
    let box_w = (text_w + 4).min(frame.w);
    let box_h = 5u16.min(frame.h);
    let bx = frame.x + frame.w.saturating_sub(box_w) / 2;
    let by = frame.y + frame.h.saturating_sub(box_h) / 2;

    let bg = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
    fb.fill_rect(bx, by, box_w, box_h, ' ', bg);
    fb.draw_border(bx, by, box_w, box_h, border_style());

    let title = bg.bold();
    put_centered(fb, bx, box_w, by + 1, overlay.title, title);

    let score_w = "SCORE ".len() as u16 + digit_count(overlay.score);
    let sx = bx + box_w.saturating_sub(score_w) / 2;
    let next = fb.put_str(sx, by + 2, "SCORE ", bg);
    fb.put_u32(next, by + 2, overlay.score, bg);

    put_centered(fb, bx, box_w, by + 3, overlay.hint, bg.dim());
}

pub(crate) fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

/// Label above a number, as in the side panels. Returns the row after the value.
pub(crate) fn draw_stat(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
    fb.put_str(x, y, label, label_style());
    fb.put_u32(x, y.saturating_add(1), value, value_style());
    y.saturating_add(3)
}

/// One-line controls hint below the frame, if the viewport has room
pub(crate) fn draw_controls(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str) {
    if y >= viewport.height {
        return;
    }
    let style = CellStyle::new(Rgb::new(150, 150, 160), PANEL_BG).dim();
    put_centered(fb, 0, viewport.width, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_centred_with_panel_room() {
        let r = place_frame(Viewport::new(80, 24), AnchorY::Center, 22, 22, 16);
        assert_eq!(r, Rect { x: 21, y: 1, w: 22, h: 22 });
        let top = place_frame(Viewport::new(80, 24), AnchorY::Top, 22, 22, 16);
        assert_eq!(top.y, 0);
    }

    #[test]
    fn overlay_shows_title_score_and_hint() {
        let mut fb = FrameBuffer::new(30, 10);
        let frame = Rect { x: 0, y: 0, w: 30, h: 10 };
        draw_overlay(&mut fb, frame, &Overlay::game_over(120));
        let text: Vec<String> = (0..10).map(|y| fb.row_text(y)).collect();
        assert!(text.iter().any(|r| r.contains("GAME OVER")));
        assert!(text.iter().any(|r| r.contains("SCORE 120")));
        assert!(text.iter().any(|r| r.contains("Press R to restart")));
    }
}
