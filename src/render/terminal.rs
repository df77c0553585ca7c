use std::io::Write;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::style::Print;

use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::input::{InputEvent, key_code_from_crossterm};

use super::Surface;

/// Crossterm-backed surface. Draw calls are queued on `writer` and only hit
/// the terminal on [`Surface::refresh`]. Raw mode and the alternate screen
/// are the driver's business.
pub struct TerminalSurface<W: Write> {
    writer: W,
    size: Size,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(writer: W, size: Size) -> Self {
        Self { writer, size }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> Size {
        self.size
    }

    fn print_at(&mut self, text: &str, x: u16, y: u16) -> Result<()> {
        for (offset, line) in text.lines().enumerate() {
            let row = y.saturating_add(offset as u16);
            if row >= self.size.height {
                break;
            }
            queue!(self.writer, MoveTo(x, row), Print(line))?;
        }
        Ok(())
    }

    fn fill_region(&mut self, rect: Rect) -> Result<()> {
        let blank = " ".repeat(usize::from(rect.width));
        for row in rect.y..rect.bottom().min(self.size.height) {
            queue!(self.writer, MoveTo(rect.x, row), Print(&blank))?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn poll_input(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let input = match event::read()? {
            Event::Key(key) => InputEvent {
                key_code: key_code_from_crossterm(&key),
            },
            _ => InputEvent::none(),
        };
        Ok(Some(input))
    }
}
