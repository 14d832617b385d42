mod config;
mod display;
mod match_runner;
mod statistics;

use clap::Parser;

use crate::config::Config;
use crate::match_runner::MatchRunner;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    MatchRunner::new().run_match(&config)
}
