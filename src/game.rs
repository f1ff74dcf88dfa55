// src/game.rs
use crate::board::Board;
use crate::types::{Color, Piece, Player, Position};
use crate::validator::MoveError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// --- Move Representation ---
/// One applied move. `piece_taken` is kept for the record only; rules never read it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub color: Color,
    pub from: Position,
    pub to: Position,
    pub piece_taken: Option<Piece>,
}

/// Promotion and draw variants are part of the state model but no rule produces them yet.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Ongoing,
    WhiteWon,
    BlackWon,
    Draw,
    PromoteWhite,
    PromoteBlack,
}

impl GameState {
    fn won_by(color: Color) -> Self {
        match color { Color::White => GameState::WhiteWon, Color::Black => GameState::BlackWon }
    }
}

// --- Game State ---
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    state: GameState,
    history: Vec<Move>,
}

// --- Game Implementation ---

impl Game {
    /// New game in the opening position. The first player takes White.
    pub fn new(white_name: &str, black_name: &str) -> Self {
        Game::from_board(Board::standard(), white_name, black_name)
    }

    /// Game starting from an arbitrary position, with White to move.
    pub fn from_board(board: Board, white_name: &str, black_name: &str) -> Self {
        Game {
            board,
            players: [
                Player { name: white_name.to_string(), color: Color::White },
                Player { name: black_name.to_string(), color: Color::Black },
            ],
            state: GameState::Ongoing,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn state(&self) -> GameState { self.state }
    pub fn players(&self) -> &[Player; 2] { &self.players }
    pub fn history(&self) -> &[Move] { &self.history }
    pub fn last_move(&self) -> Option<&Move> { self.history.last() }

    pub fn player(&self, color: Color) -> &Player {
        match color { Color::White => &self.players[0], Color::Black => &self.players[1] }
    }

    /// Derived from history: White on an empty history, otherwise whoever did not move last.
    pub fn side_to_move(&self) -> Color {
        self.history.last().map_or(Color::White, |last| last.color.opponent())
    }

    /// Pieces `color` has captured so far, in the order they were taken.
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.history.iter()
            .filter(|mv| mv.color == color)
            .filter_map(|mv| mv.piece_taken)
            .collect()
    }

    /// Legality check for `color` against the current board, without playing anything.
    pub fn is_valid_move(&self, color: Color, from: Position, to: Position) -> Result<(), MoveError> {
        self.board.is_valid_move(color, from, to)
    }

    pub fn is_check(&self, color: Color) -> bool {
        self.board.is_check(color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        if self.state != GameState::Ongoing {
            return Vec::new();
        }
        self.board.legal_moves(self.side_to_move())
    }

    // --- Public Move Execution Interface ---
    /// Plays `from` -> `to` for the side to move.
    ///
    /// On any rejection the game is left exactly as it was. After a legal move the opponent is
    /// tested for checkmate, which ends the game in the mover's favour.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<&Move, MoveError> {
        if self.state != GameState::Ongoing {
            return Err(MoveError::GameOver(self.state));
        }

        let color = self.side_to_move();
        if let Err(err) = self.board.is_valid_move(color, from, to) {
            debug!(?color, ?from, ?to, %err, "move rejected");
            return Err(err);
        }

        let piece_taken = self.board.relocate(from, to);
        self.history.push(Move { color, from, to, piece_taken });
        debug!(?color, ?from, ?to, ?piece_taken, ply = self.history.len(), "move applied");

        let opponent = color.opponent();
        if self.board.is_checkmate(opponent) {
            self.state = GameState::won_by(color);
            info!(winner = ?color, ply = self.history.len(), "checkmate");
        }

        Ok(&self.history[self.history.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;

    fn at(x: i32, y: i32) -> Position { Position::new(x, y) }

    #[test]
    fn new_game_seats_players_and_is_ongoing() {
        let game = Game::new("Alice", "Bob");
        assert_eq!(game.state(), GameState::Ongoing);
        assert_eq!(game.players()[0], Player { name: "Alice".to_string(), color: Color::White });
        assert_eq!(game.players()[1], Player { name: "Bob".to_string(), color: Color::Black });
        assert_eq!(game.board(), &Board::standard());
        assert!(game.history().is_empty());
        assert_eq!(game.is_valid_move(Color::White, at(6, 4), at(4, 4)), Ok(()));
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn turns_alternate_from_white() {
        let mut game = Game::new("Alice", "Bob");
        assert_eq!(game.side_to_move(), Color::White);

        let first = *game.move_piece(at(6, 4), at(4, 4)).unwrap();
        assert_eq!(first.color, Color::White);
        assert_eq!(game.side_to_move(), Color::Black);

        let second = *game.move_piece(at(1, 4), at(3, 4)).unwrap();
        assert_eq!(second.color, Color::Black);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn moving_out_of_turn_changes_nothing() {
        let mut game = Game::new("Alice", "Bob");
        let err = game.move_piece(at(1, 4), at(3, 4)).unwrap_err();
        assert_eq!(err, MoveError::NotPlayersPiece { color: Color::White, at: at(1, 4) });
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn capture_is_recorded() {
        let board = Board::with_pieces([
            (at(7, 4), Piece::new(PieceType::King, Color::White)),
            (at(0, 4), Piece::new(PieceType::King, Color::Black)),
            (at(4, 0), Piece::new(PieceType::Rook, Color::White)),
            (at(4, 6), Piece::new(PieceType::Knight, Color::Black)),
        ]);
        let mut game = Game::from_board(board, "Alice", "Bob");

        let mv = *game.move_piece(at(4, 0), at(4, 6)).unwrap();
        assert_eq!(mv.piece_taken, Some(Piece::new(PieceType::Knight, Color::Black)));
        assert_eq!(game.captured_by(Color::White), vec![Piece::new(PieceType::Knight, Color::Black)]);
        assert!(game.captured_by(Color::Black).is_empty());
        assert_eq!(game.state(), GameState::Ongoing);
    }

    #[test]
    fn mating_move_ends_the_game() {
        let board = Board::with_pieces([
            (at(0, 4), Piece::new(PieceType::King, Color::Black)),
            (at(7, 4), Piece::new(PieceType::King, Color::White)),
            (at(7, 0), Piece::new(PieceType::Queen, Color::White)),
            (at(1, 7), Piece::new(PieceType::Rook, Color::White)),
        ]);
        let mut game = Game::from_board(board, "Alice", "Bob");

        game.move_piece(at(7, 0), at(0, 0)).unwrap();
        assert_eq!(game.state(), GameState::WhiteWon);
        assert!(game.legal_moves().is_empty());

        let err = game.move_piece(at(0, 4), at(0, 3)).unwrap_err();
        assert_eq!(err, MoveError::GameOver(GameState::WhiteWon));
        assert_eq!(game.history().len(), 1);
    }
}
