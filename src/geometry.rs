// src/geometry.rs
use crate::board::Board;
use crate::types::Position;

#[inline]
pub fn abs(x: i32) -> i32 {
    if x < 0 { -x } else { x }
}

#[inline]
pub fn sign(x: i32) -> i32 {
    if x == 0 { 0 } else { x / abs(x) }
}

impl Board {
    /// Whether every square strictly between `from` and `to` is empty.
    ///
    /// Steps by the sign of each axis delta, so it is only meaningful for straight lines and
    /// exact diagonals; other shapes walk until the board edge. `from == to` is always clear.
    /// With `include_destination`, `to` itself must be empty as well (pawn pushes).
    pub fn is_path_clear(&self, from: Position, to: Position, include_destination: bool) -> bool {
        let step_x = sign(to.x - from.x);
        let step_y = sign(to.y - from.y);

        let mut current = from.offset(step_x, step_y);
        while current != to && current.in_bounds() {
            if !self.is_empty(current) {
                return false;
            }
            current = current.offset(step_x, step_y);
        }

        if include_destination && !self.is_empty(to) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Piece, PieceType};

    fn pawn() -> Piece { Piece::new(PieceType::Pawn, Color::White) }

    fn board_with_pawn_at(x: i32, y: i32) -> Board {
        Board::with_pieces([(Position::new(x, y), pawn())])
    }

    #[test]
    fn sign_and_abs() {
        assert_eq!(sign(0), 0);
        assert_eq!(sign(-5), -1);
        assert_eq!(sign(3), 1);
        assert_eq!(abs(-4), 4);
    }

    #[test]
    fn clear_long_diagonal() {
        assert!(Board::empty().is_path_clear(Position::new(0, 0), Position::new(7, 7), false));
    }

    #[test]
    fn obstructed_diagonal() {
        let board = board_with_pawn_at(3, 3);
        assert!(!board.is_path_clear(Position::new(0, 0), Position::new(7, 7), false));
    }

    #[test]
    fn destination_only_counts_when_included() {
        let board = board_with_pawn_at(1, 0);
        assert!(board.is_path_clear(Position::new(0, 0), Position::new(1, 0), false));
        assert!(!board.is_path_clear(Position::new(0, 0), Position::new(1, 0), true));
    }

    #[test]
    fn origin_occupant_is_ignored() {
        let board = board_with_pawn_at(0, 0);
        assert!(board.is_path_clear(Position::new(0, 0), Position::new(1, 0), false));
    }

    #[test]
    fn null_move_is_vacuously_clear() {
        let board = board_with_pawn_at(0, 0);
        assert!(board.is_path_clear(Position::new(0, 0), Position::new(0, 0), false));
    }

    #[test]
    fn irregular_shape_stops_at_edge() {
        // (1,1) -> (3,2) is not a line; the walk runs off the board instead of looping.
        let board = board_with_pawn_at(6, 6);
        assert!(!board.is_path_clear(Position::new(1, 1), Position::new(3, 2), false));
        assert!(Board::empty().is_path_clear(Position::new(1, 1), Position::new(3, 2), false));
    }
}
