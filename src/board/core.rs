use std::fmt;

use crate::error::{LifeError, Result};

/// Mutation and query surface of a Game of Life board.
///
/// Every coordinate must satisfy `row < height` and `col < width`. Passing
/// anything else is a caller bug and panics.
pub trait LifeBoard {
    /// Make the cell alive.
    fn place(&mut self, row: usize, col: usize);

    /// Invert the state of the cell.
    fn toggle(&mut self, row: usize, col: usize);

    fn is_alive(&self, row: usize, col: usize) -> bool;

    /// Replace the grid with the next generation.
    fn advance(&mut self);
}

/// Fixed-size, non-wrapping Game of Life grid.
///
/// Cells are stored row-major. `scratch` receives the next generation while
/// `cells` is read as the snapshot, then the buffers are swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
            scratch: vec![false; width * height],
        }
    }

    /// Build a board from rows of `o` (alive) and `.` (dead). Whitespace is
    /// ignored so the output of `to_string()` parses back.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| match ch {
                        'o' => Ok(true),
                        '.' => Ok(false),
                        other => Err(LifeError::Pattern(format!(
                            "unexpected `{other}` on row {row}"
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let width = parsed.first().map_or(0, Vec::len);
        if let Some(row) = parsed.iter().position(|cells| cells.len() != width) {
            return Err(LifeError::Pattern(format!(
                "row {row} is {} cells wide, expected {width}",
                parsed[row].len()
            )));
        }

        let mut board = Self::new(width, parsed.len());
        board.cells = parsed.into_iter().flatten().collect();
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Live cells among the up-to-8 neighbours of `(row, col)`. Both ranges
    /// are clamped to the board, there is no wrap-around.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.check_bounds(row, col);
        let rows = row.saturating_sub(1)..(row + 2).min(self.height);
        let mut count = 0u8;
        for r in rows {
            let cols = col.saturating_sub(1)..(col + 2).min(self.width);
            for c in cols {
                if (r, c) != (row, col) && self.cells[r * self.width + c] {
                    count += 1;
                }
            }
        }
        count
    }

    fn index(&self, row: usize, col: usize) -> usize {
        self.check_bounds(row, col);
        row * self.width + col
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside the {}x{} board",
            self.width,
            self.height
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

impl LifeBoard for Board {
    fn place(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = true;
    }

    fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    fn advance(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let alive = self.cells[row * self.width + col];
                self.scratch[row * self.width + col] =
                    matches!((alive, self.live_neighbors(row, col)), (true, 2) | (_, 3));
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for alive in &self.cells[row * self.width..(row + 1) * self.width] {
                f.write_str(if *alive { "o " } else { ". " })?;
            }
        }
        Ok(())
    }
}
