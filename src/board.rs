// src/board.rs
use crate::types::{Color, Piece, PieceType, Position};
use serde::{Deserialize, Serialize};

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook, PieceType::Knight, PieceType::Bishop, PieceType::Queen,
    PieceType::King, PieceType::Bishop, PieceType::Knight, PieceType::Rook,
];

/// 8x8 grid of optional pieces, indexed `cells[x][y]`.
///
/// `Copy` on purpose: hypothetical positions are evaluated on a scratch copy.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }

    /// Opening layout: Black on rows 0-1, White on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for y in 0..8 {
            board.cells[1][y] = Some(Piece::new(PieceType::Pawn, Color::Black));
            board.cells[6][y] = Some(Piece::new(PieceType::Pawn, Color::White));
            board.cells[0][y] = Some(Piece::new(BACK_ROW[y], Color::Black));
            board.cells[7][y] = Some(Piece::new(BACK_ROW[y], Color::White));
        }
        board
    }

    /// Builds a board holding exactly the given pieces. Later entries overwrite earlier ones.
    pub fn with_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        let mut board = Board::empty();
        for (pos, piece) in pieces {
            board.set(pos, Some(piece));
        }
        board
    }

    /// Occupant of `pos`. Squares off the board read as empty.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !pos.in_bounds() { return None; }
        self.cells[pos.x as usize][pos.y as usize]
    }

    /// Writes `piece` to `pos`; writes off the board are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.in_bounds() {
            self.cells[pos.x as usize][pos.y as usize] = piece;
        }
    }

    /// Moves the occupant of `from` onto `to`, clearing `from`. Returns what stood on `to`.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let moving = self.get(from);
        let displaced = self.get(to);
        self.set(to, moving);
        self.set(from, None);
        displaced
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Every occupied square, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter().enumerate().filter_map(move |(y, cell)| {
                cell.map(|piece| (Position::new(x as i32, y as i32), piece))
            })
        })
    }

    /// Raw grid, for renderers.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_matches_opening() {
        let board = Board::standard();
        for y in 0..8 {
            assert_eq!(board.get(Position::new(1, y)), Some(Piece::new(PieceType::Pawn, Color::Black)));
            assert_eq!(board.get(Position::new(6, y)), Some(Piece::new(PieceType::Pawn, Color::White)));
            assert_eq!(board.get(Position::new(0, y)), Some(Piece::new(BACK_ROW[y as usize], Color::Black)));
            assert_eq!(board.get(Position::new(7, y)), Some(Piece::new(BACK_ROW[y as usize], Color::White)));
            for x in 2..6 {
                assert!(board.is_empty(Position::new(x, y)));
            }
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn relocate_returns_captured_piece() {
        let rook = Piece::new(PieceType::Rook, Color::White);
        let pawn = Piece::new(PieceType::Pawn, Color::Black);
        let mut board = Board::with_pieces([(Position::new(3, 3), rook), (Position::new(3, 6), pawn)]);

        let taken = board.relocate(Position::new(3, 3), Position::new(3, 6));
        assert_eq!(taken, Some(pawn));
        assert_eq!(board.get(Position::new(3, 6)), Some(rook));
        assert!(board.is_empty(Position::new(3, 3)));
    }

    #[test]
    fn off_board_access_is_harmless() {
        let mut board = Board::empty();
        board.set(Position::new(8, 8), Some(Piece::new(PieceType::King, Color::White)));
        assert_eq!(board, Board::empty());
        assert_eq!(board.get(Position::new(-1, 0)), None);
    }
}
