// src/notation.rs
//! Square names <-> board coordinates. Files a-h map to columns 0-7; rank 8 is row 0 (Black's
//! back row) and rank 1 is row 7.

use crate::types::Position;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::fmt;

lazy_static! {
    // e2e4, e2-e4, e2 e4, e2xd3
    static ref MOVE_PATTERN: Regex =
        Regex::new(r"(?i)^\s*([a-h][1-8])\s*[-x]?\s*([a-h][1-8])\s*$").expect("move pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidSquare(String),
    InvalidMove(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidSquare(s) => write!(f, "Invalid square: '{}'. Use a file a-h and a rank 1-8, e.g. 'e2'.", s),
            InputError::InvalidMove(s) => write!(f, "Invalid move format: '{}'. Use format like 'e2e4' or 'e2-e4'.", s),
        }
    }
}

impl Error for InputError {}

/// Parses a square name such as `e2`.
pub fn parse_square(input: &str) -> Result<Position, InputError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(InputError::InvalidSquare(trimmed.to_string()));
    };
    let file = match file_char.to_ascii_lowercase() {
        c @ 'a'..='h' => c as i32 - 'a' as i32,
        _ => return Err(InputError::InvalidSquare(trimmed.to_string())),
    };
    let rank = match rank_char {
        c @ '1'..='8' => c as i32 - '0' as i32,
        _ => return Err(InputError::InvalidSquare(trimmed.to_string())),
    };
    Ok(Position::new(8 - rank, file))
}

/// Parses move text into `(from, to)`.
pub fn parse_move(input: &str) -> Result<(Position, Position), InputError> {
    let caps = MOVE_PATTERN
        .captures(input)
        .ok_or_else(|| InputError::InvalidMove(input.trim().to_string()))?;
    Ok((parse_square(&caps[1])?, parse_square(&caps[2])?))
}

/// Square name of `pos`, or `??` when it is off the board.
pub fn square_name(pos: Position) -> String {
    if !pos.in_bounds() { return "??".to_string(); }
    let file_char = (b'a' + pos.y as u8) as char;
    let rank_char = (b'1' + (7 - pos.x) as u8) as char;
    format!("{}{}", file_char, rank_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_map_to_rows_and_columns() {
        assert_eq!(parse_square("a8"), Ok(Position::new(0, 0)));
        assert_eq!(parse_square("e1"), Ok(Position::new(7, 4)));
        assert_eq!(parse_square("E2"), Ok(Position::new(6, 4)));
        assert_eq!(parse_square("h1"), Ok(Position::new(7, 7)));
    }

    #[test]
    fn bad_squares_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e22", "11"] {
            assert!(parse_square(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn move_separators() {
        let expected = (Position::new(6, 4), Position::new(4, 4));
        assert_eq!(parse_move("e2e4"), Ok(expected));
        assert_eq!(parse_move("e2-e4"), Ok(expected));
        assert_eq!(parse_move(" e2 e4 "), Ok(expected));
        assert_eq!(parse_move("E2E4"), Ok(expected));
        assert_eq!(parse_move("e2xd3"), Ok((Position::new(6, 4), Position::new(5, 3))));
        assert!(matches!(parse_move("e2e9"), Err(InputError::InvalidMove(_))));
        assert!(parse_move("resign").is_err());
    }

    #[test]
    fn square_names() {
        assert_eq!(square_name(Position::new(7, 4)), "e1");
        assert_eq!(square_name(Position::new(0, 0)), "a8");
        assert_eq!(square_name(Position::new(5, 7)), "h3");
        assert_eq!(square_name(Position::new(8, 8)), "??");
    }
}
