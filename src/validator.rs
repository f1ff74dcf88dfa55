// src/validator.rs
use crate::board::Board;
use crate::game::GameState;
use crate::types::{Color, Piece, PieceType, Position};
use std::error::Error;
use std::fmt;

// --- Custom Error Types ---

/// Why a move was rejected. Every variant is an expected, recoverable rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    NoPiece(Position),
    NotPlayersPiece { color: Color, at: Position },
    OutOfBounds(Position),
    CaptureOwnPiece(Position),
    LeavesKingInCheck,
    IllegalPieceMove { piece: Piece, reason: &'static str },
    GameOver(GameState),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece(pos) => write!(f, "No piece at {}", pos),
            MoveError::NotPlayersPiece { color, at } => write!(f, "Piece at {} is not {}'s", at, color),
            MoveError::OutOfBounds(pos) => write!(f, "Destination {} is off the board", pos),
            MoveError::CaptureOwnPiece(pos) => write!(f, "Cannot capture your own piece at {}", pos),
            MoveError::LeavesKingInCheck => write!(f, "Move would leave your king in check"),
            MoveError::IllegalPieceMove { piece, reason } => write!(f, "Invalid move for {} {}: {}", piece.color, piece.kind, reason),
            MoveError::GameOver(state) => write!(f, "Game is not ongoing, got state: {:?}", state),
        }
    }
}

impl Error for MoveError {}

impl Board {
    /// Full legality predicate for `color` moving the piece on `from` to `to`.
    ///
    /// Ownership, bounds and self-capture come first, then the self-check simulation, and only
    /// then the piece's own movement rule. Never mutates the board.
    pub fn is_valid_move(&self, color: Color, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.get(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != color {
            return Err(MoveError::NotPlayersPiece { color, at: from });
        }
        if !to.in_bounds() {
            return Err(MoveError::OutOfBounds(to));
        }
        if self.get(to).is_some_and(|target| target.color == piece.color) {
            return Err(MoveError::CaptureOwnPiece(to));
        }
        if self.would_be_check(color, from, to) {
            return Err(MoveError::LeavesKingInCheck);
        }
        self.validate_piece_move(from, to)
    }

    /// Movement rule of whichever piece stands on `from`.
    pub fn validate_piece_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = self.get(from).ok_or(MoveError::NoPiece(from))?;
        match piece.kind {
            PieceType::Pawn => self.validate_pawn_move(from, to),
            PieceType::Rook => self.validate_rook_move(from, to),
            PieceType::Knight => self.validate_knight_move(from, to),
            PieceType::Bishop => self.validate_bishop_move(from, to),
            PieceType::Queen => self.validate_queen_move(from, to),
            PieceType::King => self.validate_king_move(from, to),
        }
    }

    /// Same verdict as `is_valid_move(..).is_ok()`, but tries the movement rule before paying for
    /// the check simulation. For scans that only need a yes/no answer.
    pub fn is_legal(&self, color: Color, from: Position, to: Position) -> bool {
        from.in_bounds()
            && to.in_bounds()
            && self.validate_piece_move(from, to).is_ok()
            && self.is_valid_move(color, from, to).is_ok()
    }
}
