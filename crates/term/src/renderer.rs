//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Draws are diffed against the previously flushed frame, so a steady game
//! only rewrites the handful of cells that moved.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Used on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame, rewriting only cells that changed since the last one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let prev = self.last.take();
        let diffable = prev
            .as_ref()
            .map_or(false, |p| p.width() == fb.width() && p.height() == fb.height());

        if !diffable {
            self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<CellStyle> = None;
        // Where the terminal cursor will be after the last print; a MoveTo
        // is only queued when the next cell is elsewhere.
        let mut cursor_at: Option<(u16, u16)> = None;

        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if diffable {
                    if let Some(p) = prev.as_ref() {
                        if p.get(x, y) == Some(cell) {
                            continue;
                        }
                    }
                }

                if cursor_at != Some((x, y)) {
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                }
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
                cursor_at = Some((x + 1, y));
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last = Some(fb.clone());
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_maps_onto_crossterm_truecolor() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(rgb_to_color(rgb), Color::Rgb { r: 10, g: 20, b: 30 });
    }
}
