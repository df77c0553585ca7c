use std::collections::VecDeque;
use std::time::Duration;

use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::input::InputEvent;

use super::Surface;

/// In-memory character grid. Input is served from a queue; once the queue
/// is empty every poll times out immediately.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    size: Size,
    cells: Vec<Vec<char>>,
    input: VecDeque<Option<InputEvent>>,
    prints: usize,
    fills: usize,
    refreshes: usize,
    last_timeout: Option<Duration>,
}

impl MemorySurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![vec![' '; usize::from(size.width)]; usize::from(size.height)],
            input: VecDeque::new(),
            prints: 0,
            fills: 0,
            refreshes: 0,
            last_timeout: None,
        }
    }

    /// Queue input for later polls. `None` entries simulate a timeout.
    pub fn with_input<I>(mut self, input: I) -> Self
    where
        I: IntoIterator<Item = Option<InputEvent>>,
    {
        self.input.extend(input);
        self
    }

    pub fn row_text(&self, y: u16) -> String {
        self.cells
            .get(usize::from(y))
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    /// Whole screen, one line per row.
    pub fn contents(&self) -> String {
        (0..self.size.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn prints(&self) -> usize {
        self.prints
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Total draw calls of any kind.
    pub fn render_calls(&self) -> usize {
        self.prints + self.fills + self.refreshes
    }

    pub fn last_timeout(&self) -> Option<Duration> {
        self.last_timeout
    }

    fn put(&mut self, x: usize, y: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = ch;
        }
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> Size {
        self.size
    }

    fn print_at(&mut self, text: &str, x: u16, y: u16) -> Result<()> {
        self.prints += 1;
        for (offset, line) in text.lines().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                self.put(usize::from(x) + col, usize::from(y) + offset, ch);
            }
        }
        Ok(())
    }

    fn fill_region(&mut self, rect: Rect) -> Result<()> {
        self.fills += 1;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.put(usize::from(x), usize::from(y), ' ');
            }
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn poll_input(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        self.last_timeout = Some(timeout);
        Ok(self.input.pop_front().flatten())
    }
}
