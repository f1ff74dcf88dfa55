// src/record.rs
//! JSON game record written by the terminal front end.

use crate::game::{Game, GameState};
use crate::notation::square_name;
use crate::types::{Color, Player};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct GameRecord {
    pub players: Vec<Player>,
    pub result: GameState,
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Serialize)]
pub struct MoveEntry {
    pub ply: usize,
    pub color: Color,
    pub from: String,
    pub to: String,
    pub captured: Option<String>,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        let moves = game.history().iter().enumerate().map(|(i, mv)| MoveEntry {
            ply: i + 1,
            color: mv.color,
            from: square_name(mv.from),
            to: square_name(mv.to),
            captured: mv.piece_taken.map(|p| format!("{} {}", p.color, p.kind)),
        }).collect();

        GameRecord {
            players: game.players().to_vec(),
            result: game.state(),
            moves,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(ExportError::Serialization)
    }
}

/// Writes the record of `game` to `path` as pretty-printed JSON.
pub fn save_record_to_file(game: &Game, path: &Path) -> Result<(), ExportError> {
    let json_data = GameRecord::from_game(game).to_json()?;
    fs::write(path, json_data)
        .map_err(|e| ExportError::Io(path.display().to_string(), e))?;
    Ok(())
}

#[derive(Debug)]
pub enum ExportError {
    Serialization(serde_json::Error),
    Io(String, io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Serialization(e) => write!(f, "Serialization error: {}", e),
            ExportError::Io(file, e) => write!(f, "I/O error with file '{}': {}", file, e),
        }
    }
}

impl Error for ExportError {}
