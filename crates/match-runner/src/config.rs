//! Command-line configuration for a match.

use clap::Parser;
use reversi_engine::{Level, get_level};

/// Plays two engine levels against each other.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Level of the first engine.
    #[arg(long, value_parser = parse_level)]
    pub engine1: Level,

    /// Level of the second engine.
    #[arg(long, value_parser = parse_level)]
    pub engine2: Level,

    /// Number of game pairs. Each pair is played twice with colors swapped.
    #[arg(short, long, default_value_t = 50)]
    pub pairs: u32,

    /// Random plies played before the engines take over.
    #[arg(long, default_value_t = 4)]
    pub random_plies: u32,

    /// Seed for openings and random levels.
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_level(name: &str) -> Result<Level, String> {
    get_level(name).map_err(|err| err.to_string())
}
