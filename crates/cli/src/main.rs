mod game;
mod ui;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use num_format::{Locale, ToFormattedString};
use reversi_engine::perft::perft_root;
use reversi_engine::{Level, Stone, get_level};

/// Which colors the computer plays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Human plays dark, computer plays light.
    Dark,
    /// Computer plays dark, human plays light.
    Light,
    /// Human plays both colors.
    Both,
    /// Computer plays both colors.
    Watch,
}

impl Mode {
    /// Whether the computer moves for `color`.
    pub fn is_computer(self, color: Stone) -> bool {
        match self {
            Mode::Dark => color == Stone::Light,
            Mode::Light => color == Stone::Dark,
            Mode::Both => false,
            Mode::Watch => true,
        }
    }

    pub fn print_help() {
        println!("  dark   you play X");
        println!("  light  you play O");
        println!("  both   you play both sides");
        println!("  watch  the computer plays both sides");
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
            Mode::Both => "both",
            Mode::Watch => "watch",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Mode as ValueEnum>::from_str(s, true).map_err(|_| format!("Unknown mode: {s}"))
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Play reversi against the computer")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Computer level: random, d2, d3, d4, d8, e1250, e2500 or e5000.
    #[arg(short, long, default_value = "e2500", value_parser = parse_level)]
    level: Level,

    /// Which colors you play.
    #[arg(short, long, value_enum, default_value_t = Mode::Dark)]
    mode: Mode,

    /// Seed for the random level.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Count the leaves of the move tree from the initial position.
    Perft {
        #[arg(default_value = "6")]
        depth: u32,
    },
}

fn parse_level(name: &str) -> Result<Level, String> {
    get_level(name).map_err(|err| err.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(SubCommands::Perft { depth }) => {
            for d in 1..=depth {
                let start = Instant::now();
                let nodes = perft_root(d);
                println!(
                    "perft {d:>2}: {:>16} ({:.3}s)",
                    nodes.to_formatted_string(&Locale::en),
                    start.elapsed().as_secs_f64()
                );
            }
            Ok(())
        }
        None => ui::ui_loop(cli.level, cli.mode, cli.seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_sides() {
        assert!(Mode::Dark.is_computer(Stone::Light));
        assert!(!Mode::Dark.is_computer(Stone::Dark));
        assert!(Mode::Light.is_computer(Stone::Dark));
        assert!(!Mode::Both.is_computer(Stone::Dark));
        assert!(Mode::Watch.is_computer(Stone::Light));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("WATCH".parse::<Mode>(), Ok(Mode::Watch));
        assert!("nobody".parse::<Mode>().is_err());
        assert_eq!(Mode::Light.to_string(), "light");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["reversi"]).unwrap();
        assert_eq!(cli.level.name, "e2500");
        assert_eq!(cli.mode, Mode::Dark);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["reversi", "perft", "3"]).unwrap();
        assert!(matches!(cli.command, Some(SubCommands::Perft { depth: 3 })));
    }
}
