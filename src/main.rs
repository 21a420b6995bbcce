//! Command-line front end for the rules core.
//!
//! Run with:
//! `cargo run --release -- perft --depth 5`
//! `cargo run --release -- board --moves e2e4,e7e5 --select f1`
//! `RUST_LOG=debug cargo run -- divide --depth 2`

use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bitboard_rules::game_state::chess_types::Color;
use bitboard_rules::game_state::game_session::GameSession;
use bitboard_rules::move_generation::perft::{count_positions, divide};
use bitboard_rules::utils::algebraic::{
    algebraic_to_square, bitboard_to_squares, coordinate_to_move, move_to_coordinate,
};
use bitboard_rules::utils::random_game::{play_random_game, RandomGameConfig};
use bitboard_rules::utils::render_game_state::render_position;

#[derive(Parser, Debug)]
#[command(name = "bitboard_rules", version, about = "Bitboard chess rules core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf positions from the standard start.
    Perft {
        #[arg(short, long, default_value_t = 4)]
        depth: u32,
        #[arg(long, value_enum, default_value_t = Side::White)]
        side: Side,
    },
    /// Per-root-move perft breakdown.
    Divide {
        #[arg(short, long, default_value_t = 2)]
        depth: u32,
        #[arg(long, value_enum, default_value_t = Side::White)]
        side: Side,
    },
    /// Play uniformly random legal moves until the game ends.
    RandomGame {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 300)]
        max_plies: u16,
    },
    /// Play coordinate moves from the start and print the board.
    Board {
        /// Comma-separated moves such as `e2e4,e7e5`.
        #[arg(long, value_delimiter = ',')]
        moves: Vec<String>,
        /// Square whose legal destinations to list, e.g. `g1`.
        #[arg(long)]
        select: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Perft { depth, side } => run_perft(depth, side.into()),
        Command::Divide { depth, side } => run_divide(depth, side.into()),
        Command::RandomGame { seed, max_plies } => run_random_game(seed, max_plies),
        Command::Board { moves, select } => run_board(&moves, select.as_deref())?,
    }
    Ok(())
}

fn run_perft(depth: u32, side: Color) {
    let session = GameSession::new();
    let started = Instant::now();
    let nodes = count_positions(&session.position, depth, side);
    let elapsed = started.elapsed();

    info!(depth, nodes, ?elapsed, "perft complete");
    println!("depth {depth}: {nodes} nodes in {:.3}s", elapsed.as_secs_f64());
}

fn run_divide(depth: u32, side: Color) {
    let session = GameSession::new();
    println!("{}", divide(&session.position, depth, side));
}

fn run_random_game(seed: u64, max_plies: u16) {
    let mut rng = StdRng::seed_from_u64(seed);
    let report = play_random_game(&RandomGameConfig { max_plies }, &mut rng);

    let line: Vec<String> = report.moves.iter().copied().map(move_to_coordinate).collect();
    println!("{}", line.join(" "));
    println!("{}", render_position(&report.final_session.position));
    println!("{:?} after {} plies", report.outcome, report.plies());
}

fn run_board(moves: &[String], select: Option<&str>) -> anyhow::Result<()> {
    let mut session = GameSession::new();
    for text in moves.iter().map(|m| m.trim()).filter(|m| !m.is_empty()) {
        if session.status().is_over() {
            bail!("game is already over before {text}");
        }
        let chess_move =
            coordinate_to_move(text).with_context(|| format!("could not parse move {text}"))?;
        session
            .play(chess_move)
            .with_context(|| format!("could not play {text}"))?;
    }

    println!("{}", render_position(&session.position));
    println!("{} to move: {:?}", session.side_to_move, session.status());

    if let Some(name) = select {
        let square = algebraic_to_square(name)
            .with_context(|| format!("could not parse square {name}"))?;
        let targets = session.destinations_from(square);
        println!("{name}: {}", bitboard_to_squares(targets));
    }
    Ok(())
}
