// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Enums and Basic Structs ---
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color { White, Black }

impl Color {
    pub fn opponent(&self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }

    /// Row step a pawn of this color takes when advancing.
    pub(crate) fn pawn_direction(&self) -> i32 {
        match self { Color::White => -1, Color::Black => 1 }
    }

    /// Row the pawns of this color start on.
    pub(crate) fn pawn_start_row(&self) -> i32 {
        match self { Color::White => 6, Color::Black => 1 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType { Pawn, Rook, Knight, Bishop, Queen, King }

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn", PieceType::Rook => "rook", PieceType::Knight => "knight",
            PieceType::Bishop => "bishop", PieceType::Queen => "queen", PieceType::King => "king",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color) -> Self { Piece { kind, color } }

    /// Letter used on the rendered board: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let symbol = match self.kind {
            PieceType::Pawn => 'p', PieceType::Knight => 'n', PieceType::Bishop => 'b',
            PieceType::Rook => 'r', PieceType::Queen => 'q', PieceType::King => 'k',
        };
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board coordinate. `x` is the row (0 = Black's back row), `y` the column (0 = file a).
///
/// Signed so that inbound coordinates outside the board can be represented and rejected.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self { Position { x, y } }

    pub fn in_bounds(&self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}
