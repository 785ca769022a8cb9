use clap::Parser;
use env_logger::Env;

use chess_core::config::{GameConfig, PlayerConfig};
use chess_core::game::MoveError;
use chess_core::orchestrator::Orchestrator;

fn parse_player(name: &str) -> Result<PlayerConfig, String> {
    PlayerConfig::from_name(name)
        .ok_or_else(|| format!("unknown player {:?}, expected random, easy, medium or hard", name))
}

/// Plays a game of chess between two automated players.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Player for White: random, easy, medium or hard.
    #[arg(long, default_value = "easy", value_parser = parse_player)]
    white: PlayerConfig,
    /// Player for Black: random, easy, medium or hard.
    #[arg(long, default_value = "easy", value_parser = parse_player)]
    black: PlayerConfig,
    /// Stop after this many plies even if the game is not over.
    #[arg(long)]
    max_plies: Option<u32>,
    /// Seed for every randomized player, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        GameConfig {
            white: args.white,
            black: args.black,
            max_plies: args.max_plies,
            seed: args.seed,
        }
    }
}

fn main() -> Result<(), MoveError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = GameConfig::from(Args::parse());
    let summary = Orchestrator::new(&config).run()?;

    println!("{}", summary.final_position);
    println!("{} after {} plies ({:?})", summary.result, summary.plies(), summary.termination);
    Ok(())
}
