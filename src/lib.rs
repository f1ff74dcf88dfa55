// src/lib.rs
//! Chess rules engine: board model, per-piece legality, check and checkmate detection, and a
//! two-player turn controller.
//!
//! Coordinates are `(x, y)` with `x` the row (0 = Black's back row, 7 = White's) and `y` the
//! column (0 = file a). Castling, en passant, promotion and draws are not implemented; a game
//! only ends by checkmate.

pub mod board;
mod check;
pub mod config;
pub mod game;
pub mod geometry;
pub mod notation;
pub mod record;
mod rules;
pub mod types;
pub mod validator;

pub use board::Board;
pub use game::{Game, GameState, Move};
pub use types::{Color, Piece, PieceType, Player, Position};
pub use validator::MoveError;
