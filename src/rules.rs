// src/rules.rs
//! Per-piece movement rules.
//!
//! Each rule assumes a piece sits on `from` and `to` is on the board; turn ownership and
//! self-check are the validator's concern. They are public so positions can be probed one
//! rule at a time.

use crate::board::Board;
use crate::geometry::abs;
use crate::types::{Piece, Position};
use crate::validator::MoveError;

impl Board {
    fn mover(&self, from: Position) -> Result<Piece, MoveError> {
        self.get(from).ok_or(MoveError::NoPiece(from))
    }

    fn lands_on_own_piece(&self, piece: Piece, to: Position) -> bool {
        self.get(to).is_some_and(|target| target.color == piece.color)
    }

    pub fn validate_pawn_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.mover(from)?;
        let direction = piece.color.pawn_direction();
        let (dx, dy) = (to.x - from.x, to.y - from.y);

        if dy == 0 && dx == direction && self.is_path_clear(from, to, true) {
            return Ok(());
        }
        // Path check covers the skipped square as well as the destination.
        if dy == 0 && dx == 2 * direction && from.x == piece.color.pawn_start_row() && self.is_path_clear(from, to, true) {
            return Ok(());
        }
        if abs(dy) == 1 && dx == direction {
            return match self.get(to) {
                Some(target) if target.color == piece.color.opponent() => Ok(()),
                _ => Err(MoveError::IllegalPieceMove { piece, reason: "diagonal moves must capture" }),
            };
        }
        Err(MoveError::IllegalPieceMove { piece, reason: "pawns move one square forward, or two from their starting row" })
    }

    pub fn validate_knight_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.mover(from)?;
        if !to.in_bounds() {
            return Err(MoveError::OutOfBounds(to));
        }
        let (dx, dy) = (abs(to.x - from.x), abs(to.y - from.y));
        if !matches!((dx, dy), (2, 1) | (1, 2)) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "not an L-shape" });
        }
        if self.lands_on_own_piece(piece, to) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "cannot capture own piece" });
        }
        Ok(())
    }

    pub fn validate_bishop_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.mover(from)?;
        let (dx, dy) = (abs(to.x - from.x), abs(to.y - from.y));
        if dx != dy || dx == 0 {
            return Err(MoveError::IllegalPieceMove { piece, reason: "not diagonal" });
        }
        if !self.is_path_clear(from, to, false) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "path is not clear" });
        }
        if self.lands_on_own_piece(piece, to) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "cannot capture own piece" });
        }
        Ok(())
    }

    pub fn validate_rook_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.mover(from)?;
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        if (dx == 0) == (dy == 0) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "not along a row or column" });
        }
        if !self.is_path_clear(from, to, false) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "path is not clear" });
        }
        if self.lands_on_own_piece(piece, to) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "cannot capture own piece" });
        }
        Ok(())
    }

    pub fn validate_queen_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.mover(from)?;
        if self.validate_rook_move(from, to).is_ok() || self.validate_bishop_move(from, to).is_ok() {
            return Ok(());
        }
        Err(MoveError::IllegalPieceMove { piece, reason: "neither a straight nor a diagonal path" })
    }

    /// One square in any direction. The null move fails as a capture of the king itself.
    pub fn validate_king_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.mover(from)?;
        if self.lands_on_own_piece(piece, to) {
            return Err(MoveError::IllegalPieceMove { piece, reason: "cannot capture own piece" });
        }
        if abs(to.x - from.x) > 1 || abs(to.y - from.y) > 1 {
            return Err(MoveError::IllegalPieceMove { piece, reason: "kings move one square" });
        }
        Ok(())
    }
}
