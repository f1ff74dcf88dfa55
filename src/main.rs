// src/main.rs
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rust_chess_rules::config::Config;
use rust_chess_rules::notation::{parse_move, square_name, InputError};
use rust_chess_rules::record::{save_record_to_file, ExportError};
use rust_chess_rules::{Color, Game, GameState, Position};
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

// --- Board Rendering ---
struct GameView<'a>(&'a Game);

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;

        let white = game.captured_by(Color::White);
        let black = game.captured_by(Color::Black);
        write!(f, "Captured by White: ")?;
        for piece in white { write!(f, "{} ", piece)?; }
        writeln!(f)?;
        write!(f, "Captured by Black: ")?;
        for piece in black { write!(f, "{} ", piece)?; }
        writeln!(f)?;

        writeln!(f, "  +-----------------+")?;
        for (x, row) in game.board().rows().iter().enumerate() {
            write!(f, "{} | ", 8 - x)?;
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "{} ", piece)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;

        if let Some(last) = game.last_move() {
            writeln!(f, "Last move: {:?} {}{}", last.color, square_name(last.from), square_name(last.to))?;
        }
        Ok(())
    }
}

// --- Command Errors ---
#[derive(Debug)]
enum CommandError {
    InvalidInput(InputError),
    Export(ExportError),
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidInput(e) => write!(f, "Input Error: {}", e),
            CommandError::Export(e) => write!(f, "Error saving game record: {}", e),
            CommandError::Io(e) => write!(f, "Input/Output error: {}", e),
        }
    }
}

impl Error for CommandError {}

impl From<InputError> for CommandError {
    fn from(e: InputError) -> Self { CommandError::InvalidInput(e) }
}
impl From<ExportError> for CommandError {
    fn from(e: ExportError) -> Self { CommandError::Export(e) }
}
impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self { CommandError::Io(e) }
}

// --- Input Parsing ---
#[derive(Debug)]
enum Command {
    Move(Position, Position),
    Moves,
    Auto,
    Save(Option<PathBuf>),
    Help,
    Quit,
}

fn parse_user_input(input: &str) -> Result<Command, CommandError> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or("").to_lowercase();
    let argument = parts.next().unwrap_or("").trim();

    match word.as_str() {
        "moves" => return Ok(Command::Moves),
        "auto" => return Ok(Command::Auto),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "save" => {
            let path = if argument.is_empty() { None } else { Some(PathBuf::from(argument)) };
            return Ok(Command::Save(path));
        }
        _ => {}
    }

    let (from, to) = parse_move(trimmed)?;
    Ok(Command::Move(from, to))
}

fn play(game: &mut Game, from: Position, to: Position) {
    let mover = game.side_to_move();
    match game.move_piece(from, to) {
        Ok(_) => {
            if game.state() == GameState::Ongoing && game.is_check(mover.opponent()) {
                println!("{:?} is in check!", mover.opponent());
            }
        }
        Err(e) => println!("Error making move: {}", e),
    }
}

fn save(game: &Game, path: &Path) -> Result<(), CommandError> {
    save_record_to_file(game, path)?;
    println!("Game record saved to '{}'.", path.display());
    Ok(())
}

fn report(result: Result<(), CommandError>) {
    if let Err(e) = result {
        eprintln!("{}", e);
    }
}

// --- Main Game Loop ---

fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(&config.white_name, &config.black_name);

    println!("==============================");
    println!("|        Rust Chess          |");
    println!("==============================");
    println!("{} (White) vs {} (Black)", config.white_name, config.black_name);
    print_help();

    'game_loop: loop {
        println!("------------------------------------------");
        println!("{}", GameView(&game));

        if game.state() != GameState::Ongoing {
            match game.state() {
                GameState::WhiteWon => println!("\n=== GAME OVER: {} (White) wins by checkmate. ===", config.white_name),
                GameState::BlackWon => println!("\n=== GAME OVER: {} (Black) wins by checkmate. ===", config.black_name),
                other => println!("\n=== GAME OVER: {:?} ===", other),
            }
            report(save(&game, &config.record_path));
            break 'game_loop;
        }

        let color = game.side_to_move();
        print!("\n{} ({:?}) to move. Enter move (e.g. e2e4) or command: ", game.player(color).name, color);
        io::stdout().flush()?;

        let mut input_line = String::new();
        match io::stdin().read_line(&mut input_line) {
            Ok(0) => {
                println!("\nEnd of input detected. Quitting game.");
                report(save(&game, &config.record_path));
                break 'game_loop;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}. Try again or use 'quit'.", CommandError::from(e));
                continue 'game_loop;
            }
        }
        if input_line.trim().is_empty() { continue 'game_loop; }

        match parse_user_input(&input_line) {
            Ok(Command::Move(from, to)) => play(&mut game, from, to),
            Ok(Command::Moves) => {
                let moves: Vec<String> = game.legal_moves().iter()
                    .map(|(from, to)| format!("{}{}", square_name(*from), square_name(*to)))
                    .collect();
                println!("Legal moves ({}): {}", moves.len(), moves.join(" "));
            }
            Ok(Command::Auto) => {
                let moves = game.legal_moves();
                match moves.choose(&mut rng) {
                    Some(&(from, to)) => {
                        println!("Playing {}{}", square_name(from), square_name(to));
                        play(&mut game, from, to);
                    }
                    None => println!("No legal moves available."),
                }
            }
            Ok(Command::Save(path)) => report(save(&game, path.as_ref().unwrap_or(&config.record_path))),
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => {
                println!("Quit command received.");
                report(save(&game, &config.record_path));
                break 'game_loop;
            }
            Err(e) => println!("{}", e),
        }
    }

    println!("\nGame session finished.");
    Ok(())
}

/// Prints available commands.
fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <move>         Enter a move as two squares (e.g., e2e4, e2-e4, g1 f3)");
    println!("  moves          List every legal move for the side to move.");
    println!("  auto           Play a random legal move.");
    println!("  save [file]    Save the game record as JSON.");
    println!("  help           Show this help message.");
    println!("  quit / exit    Save the game record and exit.");
    println!();
}
