//! Editor cursor that walks the visible board.
//!
//! Positions are cell coordinates on screen (see [`Viewport`]). Every move is
//! clamped into the viewport's cursor bounds, so pushing against an edge is a
//! silent no-op.

use crate::geometry::{Point, Viewport, ensure_in_range};

/// Arrow direction carried by a move action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Point,
    min: Point,
    max: Point,
}

impl Cursor {
    /// Cursor at `(width / 5, height / 3)` of the display, clamped.
    pub fn new(viewport: &Viewport) -> Self {
        let size = viewport.size();
        Self::at(viewport, Point::new(size.width / 5, size.height / 3))
    }

    /// Cursor at an explicit position, clamped into the viewport bounds.
    pub fn at(viewport: &Viewport, position: Point) -> Self {
        let (min, max) = viewport.cursor_bounds();
        let mut cursor = Self { position, min, max };
        cursor.position = cursor.clamp(i32::from(position.x), i32::from(position.y));
        cursor
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn move_by(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.position = self.clamp(
            i32::from(self.position.x) + dx,
            i32::from(self.position.y) + dy,
        );
    }

    fn clamp(&self, x: i32, y: i32) -> Point {
        // Bounds come from u16 values, so the clamped result fits back.
        let x = ensure_in_range(x, i32::from(self.min.x), i32::from(self.max.x));
        let y = ensure_in_range(y, i32::from(self.min.y), i32::from(self.max.y));
        Point::new(x as u16, y as u16)
    }
}
