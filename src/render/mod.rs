//! Rendering collaborator used by the controller.
//!
//! The controller only needs to print text, clear a rectangle, flush and
//! wait for input. [`TerminalSurface`] does that with crossterm;
//! [`MemorySurface`] keeps a character grid in memory for tests and benches.

mod memory;
mod terminal;

pub use memory::MemorySurface;
pub use terminal::TerminalSurface;

use std::time::Duration;

use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::input::InputEvent;

pub trait Surface {
    /// Size of the display, queried once to lay out the board.
    fn size(&self) -> Size;

    /// Print `text` with its first line at column `x`, row `y`. Further
    /// lines go on the rows below, starting at the same column.
    fn print_at(&mut self, text: &str, x: u16, y: u16) -> Result<()>;

    /// Blank out `rect`.
    fn fill_region(&mut self, rect: Rect) -> Result<()>;

    /// Flush pending draw operations to the display.
    fn refresh(&mut self) -> Result<()>;

    /// Wait up to `timeout` for the next input event.
    fn poll_input(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}
