//! Goban: a rules engine for the board game Go.
//!
//! The binary is a thin exerciser around the library:
//!
//! - `goban demo` - walk through a capture, a suicide rejection, and a ko
//! - `goban selfplay` - play random legal moves and report the result

use anyhow::bail;
use clap::{Parser, Subcommand};

use goban::board::Stone;
use goban::coord::str_coord;
use goban::engine::{BoardEngine, MoveError};

/// Goban: Go rules engine demo driver
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rules engine resolving captures, suicide, and ko
    Demo,
    /// Play random legal moves against itself
    Selfplay {
        /// Board size per side (5-19)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Maximum number of accepted moves
        #[arg(long, default_value_t = 120)]
        moves: usize,
        /// RNG seed for reproducible games
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay { size, moves, seed }) => selfplay(size, moves, seed),
        Some(Commands::Demo) | None => demo(),
    }
}

fn demo() -> anyhow::Result<()> {
    println!("=== Capture ===");
    let mut game = BoardEngine::new(5, Stone::Black)?;
    // Black surrounds the white stone at (1, 1).
    for p in [(1, 0), (1, 1), (0, 1), (4, 4), (2, 1), (3, 4)] {
        game.play(p)?;
    }
    let outcome = game.play((1, 2))?;
    println!("black captures {} stone(s)", outcome.captured.len());
    print!("{}", game.board());

    println!("\n=== Suicide ===");
    let mut game = BoardEngine::new(5, Stone::Black)?;
    for p in [(1, 0), (4, 4), (0, 1)] {
        game.play(p)?;
    }
    match game.play((0, 0)) {
        Err(e @ MoveError::Suicide) => println!("white at (0,0): {e}"),
        other => bail!("expected suicide rejection, got {other:?}"),
    }

    println!("\n=== Ko ===");
    let mut game = BoardEngine::new(5, Stone::Black)?;
    for p in [(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2), (4, 4), (1, 1)] {
        game.play(p)?;
    }
    game.play((2, 1))?;
    println!("black takes the ko at (2,1)");
    match game.play((1, 1)) {
        Err(e @ MoveError::Ko) => println!("white retakes at (1,1): {e}"),
        other => bail!("expected ko rejection, got {other:?}"),
    }
    print!("{}", game.board());

    Ok(())
}

fn selfplay(size: usize, moves: usize, seed: u64) -> anyhow::Result<()> {
    // The 5-19 range is a game-domain rule, enforced here at the caller
    // layer; the engine itself only rejects size 0.
    if !(5..=19).contains(&size) {
        bail!("board size must be between 5 and 19, got {size}");
    }

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut game = BoardEngine::new(size, Stone::Black)?;
    let mut passes = 0;

    while game.move_count() < moves && passes < 2 {
        match random_move(&mut game, &mut rng) {
            Some(outcome) => {
                passes = 0;
                if !outcome.captured.is_empty() {
                    let at = str_coord(outcome.point, size).unwrap_or_default();
                    println!(
                        "move {:>3}: {} {} captures {}",
                        game.move_count(),
                        outcome.color,
                        at,
                        outcome.captured.len()
                    );
                }
            }
            None => {
                game.toggle_turn();
                passes += 1;
            }
        }
    }

    let caught = game.caught();
    println!(
        "\n{} moves played, caught: {} black / {} white",
        game.move_count(),
        caught.black,
        caught.white
    );
    print!("{}", game.board());
    Ok(())
}

/// Try random empty points until one is legal. Returns `None` when the
/// current color has no legal move left, which counts as a pass.
fn random_move(
    game: &mut BoardEngine,
    rng: &mut fastrand::Rng,
) -> Option<goban::engine::MoveOutcome> {
    let mut empties: Vec<_> = game
        .board()
        .points()
        .filter(|&p| game.board().get(p) == Some(Stone::Empty))
        .collect();

    while !empties.is_empty() {
        let i = rng.usize(..empties.len());
        let p = empties.swap_remove(i);
        if let Ok(outcome) = game.play(p) {
            return Some(outcome);
        }
    }
    None
}
