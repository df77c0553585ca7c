//! Screen geometry and the single screen↔board coordinate transform.

use crate::error::{LifeError, Result};

/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen position, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Rectangle area anchored within the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }
}

/// Clamp `value` into `[low, high]`. When the range is empty `low` wins.
pub fn ensure_in_range(value: i32, low: i32, high: i32) -> i32 {
    if value > high { high.max(low) } else { value.max(low) }
}

/// Where the board sits on screen and how cursor positions map onto cells.
///
/// The board is drawn one row and one column in from the top-left corner and
/// every cell takes two character columns (`"o "` / `". "`). Cursor positions
/// are expressed in cell columns, so `(1, 1)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    size: Size,
}

impl Viewport {
    /// Fixed offset of board cell `(0, 0)` in cursor coordinates.
    pub const BOARD_OFFSET: Point = Point::new(1, 1);
    /// Character columns used by one rendered cell.
    pub const CELL_COLUMNS: u16 = 2;

    /// Build the viewport for a display surface. Fails when the surface is
    /// too small to hold a single board cell.
    pub fn new(size: Size) -> Result<Self> {
        let viewport = Self { size };
        let board = viewport.board_size();
        if board.width == 0 || board.height == 0 {
            return Err(LifeError::Terminal(format!(
                "display {}x{} is too small for the board",
                size.width, size.height
            )));
        }
        Ok(viewport)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Board dimensions in cells: `(width/2 - 2) x (height - 2)`.
    pub fn board_size(&self) -> Size {
        Size::new(
            (self.size.width / 2).saturating_sub(2),
            self.size.height.saturating_sub(2),
        )
    }

    /// Inclusive cursor bounds `(min, max)`: `[1, width/2 - 2] x [1, height - 2]`.
    pub fn cursor_bounds(&self) -> (Point, Point) {
        let board = self.board_size();
        (
            Self::BOARD_OFFSET,
            Point::new(
                Self::BOARD_OFFSET.x + board.width - 1,
                Self::BOARD_OFFSET.y + board.height - 1,
            ),
        )
    }

    /// Board `(row, col)` under a cursor position.
    pub fn to_board(&self, cursor: Point) -> (usize, usize) {
        (
            usize::from(cursor.y.saturating_sub(Self::BOARD_OFFSET.y)),
            usize::from(cursor.x.saturating_sub(Self::BOARD_OFFSET.x)),
        )
    }

    /// Screen column of the glyph for board column `col`.
    pub fn cell_column(&self, col: usize) -> u16 {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        Self::BOARD_OFFSET
            .x
            .saturating_add(col.saturating_mul(Self::CELL_COLUMNS))
    }

    /// Screen row of board row `row`.
    pub fn cell_row(&self, row: usize) -> u16 {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        Self::BOARD_OFFSET.y.saturating_add(row)
    }

    /// Left half of the display, cleared before every board redraw.
    pub fn board_pane(&self) -> Rect {
        Rect::new(0, 0, self.size.width / 2, self.size.height)
    }

    /// First column of the sidebar text.
    pub fn sidebar_column(&self) -> u16 {
        self.size.width / 2 + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_range() {
        assert_eq!(ensure_in_range(-4, 1, 10), 1);
        assert_eq!(ensure_in_range(5, 1, 10), 5);
        assert_eq!(ensure_in_range(11, 1, 10), 10);
    }

    #[test]
    fn empty_range_prefers_low() {
        assert_eq!(ensure_in_range(7, 3, 2), 3);
        assert_eq!(ensure_in_range(0, 3, 2), 3);
    }

    #[test]
    fn board_fills_cursor_range() {
        let viewport = Viewport::new(Size::new(80, 24)).unwrap();
        assert_eq!(viewport.board_size(), Size::new(38, 22));
        let (min, max) = viewport.cursor_bounds();
        assert_eq!(min, Point::new(1, 1));
        assert_eq!(max, Point::new(38, 22));
        assert_eq!(viewport.to_board(min), (0, 0));
        assert_eq!(viewport.to_board(max), (21, 37));
    }

    #[test]
    fn cells_take_two_columns() {
        let viewport = Viewport::new(Size::new(40, 12)).unwrap();
        assert_eq!(viewport.cell_column(0), 1);
        assert_eq!(viewport.cell_column(3), 7);
        assert_eq!(viewport.cell_row(4), 5);
        assert_eq!(viewport.board_pane(), Rect::new(0, 0, 20, 12));
        assert_eq!(viewport.sidebar_column(), 22);
    }

    #[test]
    fn tiny_display_is_rejected() {
        assert!(Viewport::new(Size::new(5, 24)).is_err());
        assert!(Viewport::new(Size::new(80, 2)).is_err());
        assert!(Viewport::new(Size::new(6, 3)).is_ok());
    }
}
