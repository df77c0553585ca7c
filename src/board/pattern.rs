//! The single preset pattern the editor can stamp.

use crate::geometry::ensure_in_range;

use super::core::Board;
use super::LifeBoard;

/// Glider offsets as `(row, col)` relative to the anchor:
///
/// ```text
/// . o .
/// . . o
/// o o o
/// ```
pub const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

const GLIDER_SPAN: usize = 3;

/// Stamp a glider with its top-left corner at `(row, col)`.
///
/// The anchor is pulled back so the whole 3x3 footprint fits on the board.
/// On boards narrower or shorter than the footprint the cells that still
/// fall outside are dropped.
pub fn place_glider(board: &mut Board, row: usize, col: usize) {
    let row = clamp_anchor(row, board.height());
    let col = clamp_anchor(col, board.width());
    for (dr, dc) in GLIDER {
        let (r, c) = (row + dr, col + dc);
        if r < board.height() && c < board.width() {
            board.place(r, c);
        }
    }
}

fn clamp_anchor(anchor: usize, dimension: usize) -> usize {
    let high = i32::try_from(dimension.saturating_sub(GLIDER_SPAN)).unwrap_or(i32::MAX);
    let anchor = i32::try_from(anchor).unwrap_or(i32::MAX);
    // `high >= 0`, so the clamped value is never negative.
    ensure_in_range(anchor, 0, high) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamps_canonical_glider() {
        let mut board = Board::new(5, 5);
        place_glider(&mut board, 1, 1);
        let expected = Board::from_rows(&[".....", "..o..", "...o.", ".ooo.", "....."]).unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn glider_translates_diagonally_every_four_generations() {
        let mut board = Board::new(8, 8);
        place_glider(&mut board, 0, 0);
        for _ in 0..4 {
            board.advance();
        }

        let mut shifted = Board::new(8, 8);
        for (dr, dc) in GLIDER {
            shifted.place(dr + 1, dc + 1);
        }
        assert_eq!(board, shifted);
    }

    #[test]
    fn anchor_is_pulled_inside_the_board() {
        let mut board = Board::new(4, 4);
        place_glider(&mut board, 3, 3);
        let expected = Board::from_rows(&["....", "..o.", "...o", ".ooo"]).unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn only_places_never_toggles() {
        let mut board = Board::new(3, 3);
        board.place(0, 1);
        place_glider(&mut board, 0, 0);
        assert!(board.is_alive(0, 1));
        assert_eq!(board.population(), 5);
    }

    #[test]
    fn small_board_drops_overflowing_cells() {
        let mut board = Board::new(2, 2);
        place_glider(&mut board, 0, 0);
        let expected = Board::from_rows(&[".o", ".."]).unwrap();
        assert_eq!(board, expected);
    }
}
