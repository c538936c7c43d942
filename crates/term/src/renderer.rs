//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; later frames only rewrite runs of changed cells.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Owns the terminal session and the previously flushed frame.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen, `None` when the next draw must be full.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.shown = None;

        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !std::mem::replace(&mut self.entered, false) {
            return Ok(());
        }

        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Flush `fb`, then hand the caller back the previous frame's buffer.
    ///
    /// Keep passing the same `FrameBuffer` every frame: the two allocations
    /// alternate between caller and renderer and nothing is cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.shown.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.shown = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Queues glyphs, emitting style changes only when the style differs.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                queue_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` (no I/O).
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.out.queue(cursor::MoveTo(0, y))?;
        painter.paint(row(fb, y))?;
    }
    painter.finish()
}

/// Encode only the cells that differ from `prev` into `out` (no I/O).
///
/// Frames of different sizes are repainted row by row.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    let mut painter = Painter::new(out);
    for y in 0..next.height() {
        let cells = row(next, y);
        if !same_size {
            painter.out.queue(cursor::MoveTo(0, y))?;
            painter.paint(cells)?;
            continue;
        }
        for run in changed_runs(row(prev, y), cells) {
            painter.out.queue(cursor::MoveTo(run.start as u16, y))?;
            painter.paint(&cells[run])?;
        }
    }
    painter.finish()
}

fn row(fb: &FrameBuffer, y: u16) -> &[Cell] {
    let w = fb.width() as usize;
    let start = y as usize * w;
    &fb.cells()[start..start + w]
}

/// Maximal runs of column indices where the two rows differ.
fn changed_runs<'a>(prev: &'a [Cell], next: &'a [Cell]) -> impl Iterator<Item = Range<usize>> + 'a {
    let len = prev.len().min(next.len());
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < len && prev[x] == next[x] {
            x += 1;
        }
        if x >= len {
            return None;
        }
        let start = x;
        while x < len && prev[x] != next[x] {
            x += 1;
        }
        Some(start..x)
    })
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetForegroundColor(true_color(style.fg)))?
        .queue(SetBackgroundColor(true_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn true_color(rgb: Rgb) -> Color {
    let Rgb { r, g, b } = rgb;
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char) -> Cell {
        CellStyle::default().into_cell(ch)
    }

    fn text(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }

    #[test]
    fn full_encoding_paints_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        fb.put_str(0, 1, "CD", CellStyle::default());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let s = text(&out);
        assert!(s.contains("AB"));
        assert!(s.contains("CD"));
    }

    #[test]
    fn identical_frames_encode_no_glyphs() {
        let mut a = FrameBuffer::new(3, 1);
        a.set(1, 0, glyph('Q'));
        let b = a.clone();

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(!text(&out).contains('Q'));
    }

    #[test]
    fn diff_emits_only_changed_glyphs() {
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        b.set(4, 1, glyph('Z'));

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let s = text(&out);
        assert!(s.contains('Z'));
        assert_eq!(s.matches(' ').count(), 0);
    }

    #[test]
    fn resized_diff_repaints_everything() {
        let a = FrameBuffer::new(2, 1);
        let mut b = FrameBuffer::new(3, 2);
        b.put_str(0, 1, "xyz", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(text(&out).contains("xyz"));
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = vec![glyph(' '); 8];
        let mut b = a.clone();
        for x in [1, 2, 3, 6] {
            b[x] = glyph('X');
        }
        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![1..4, 6..7]);
        assert_eq!(changed_runs(&a, &a).count(), 0);
    }

    #[test]
    fn style_is_true_colour() {
        assert_eq!(
            true_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
