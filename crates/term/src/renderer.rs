//! TerminalRenderer: owns the terminal session and flushes framebuffers to it.
//!
//! Frames are diffed against the previous one and only changed runs are
//! re-encoded. A size change (or [`TerminalRenderer::invalidate`]) forces a
//! full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
    frames: u64,
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
            prev: None,
            buf: Vec::with_capacity(32 * 1024),
            frames: 0,
        }
    }

    /// Raw mode, alternate screen, hidden cursor, mouse capture.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        log::debug!("terminal session entered");
        Ok(())
    }

    /// Undo everything `enter` did. Safe to call after a partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("terminal session left after {} frames", self.frames);
        Ok(())
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller can render over, so the
    /// two buffers ping-pong without cloning.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.prev.as_mut() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
            }
        }
        self.flush_buf()?;
        self.frames += 1;

        let prev = self
            .prev
            .get_or_insert_with(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(prev, fb);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(fb, 0, y, fb.width(), &mut style, out)?;
    }
    finish(out)
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        encode_run(next, x, y, len, &mut style, out)?;
    }
    finish(out)
}

fn encode_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(if style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    }))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ, in row-major order.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, style.cell('X'));
        }
        b.set(5, 1, style.cell('Y'));

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_only_reset() {
        let a = FrameBuffer::new(4, 4);
        let mut diff = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut diff).unwrap();

        let mut reset_only = Vec::new();
        finish(&mut reset_only).unwrap();
        assert_eq!(diff, reset_only);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, style.cell('A'));
        fb.set(1, 1, style.cell('D'));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('A'));
        assert!(text.contains('D'));
    }
}
