// src/check.rs
use crate::board::Board;
use crate::types::{Color, PieceType, Position};
use tracing::trace;

// King escape offsets (dx, dy), excluding the king's own square
const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

impl Board {
    /// Square of `color`'s king, if it has one.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceType::King && piece.color == color)
            .map(|(pos, _)| pos)
    }

    /// Whether some enemy piece has a legal move onto `color`'s king.
    ///
    /// Attacks are judged with the full validator, so an attacker pinned to its own king does
    /// not give check. A side without a king is never in check.
    pub fn is_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return false;
        };
        self.pieces()
            .filter(|(_, piece)| piece.color != color)
            .any(|(pos, piece)| self.is_legal(piece.color, pos, king))
    }

    /// Whether `color` would stand in check after moving `from` to `to`.
    ///
    /// Evaluated on a scratch copy, so `self` is never in a hypothetical state.
    pub fn would_be_check(&self, color: Color, from: Position, to: Position) -> bool {
        let mut scratch = *self;
        scratch.relocate(from, to);
        let in_check = scratch.is_check(color);
        trace!(?color, ?from, ?to, in_check, "simulated move");
        in_check
    }

    /// Checkmate as this engine defines it: in check and no adjacent square the king can step to.
    ///
    /// Blocking the attack or capturing the attacker with another piece is not considered.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_check(color) {
            return false;
        }
        let Some(king) = self.find_king(color) else {
            return false;
        };
        !KING_OFFSETS.iter().any(|&(dx, dy)| {
            let escape = king.offset(dx, dy);
            escape.in_bounds() && self.is_legal(color, king, escape)
        })
    }

    /// Every `(from, to)` pair `color` may legally play.
    pub fn legal_moves(&self, color: Color) -> Vec<(Position, Position)> {
        let mut moves = Vec::new();
        for (from, _) in self.pieces().filter(|(_, piece)| piece.color == color) {
            for x in 0..8 {
                for y in 0..8 {
                    let to = Position::new(x, y);
                    if self.is_legal(color, from, to) {
                        moves.push((from, to));
                    }
                }
            }
        }
        moves
    }
}
