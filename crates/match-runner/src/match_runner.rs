//! Match execution and game management.
//!
//! Games are played in pairs from a shared random opening, once with each
//! engine moving first, so neither side profits from a lucky opening.

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{RngExt, SeedableRng};
use reversi_engine::{Decision, Game, Level, Player, Stone, create_player};

use crate::config::Config;
use crate::display::DisplayManager;
use crate::statistics::{GameRecord, MatchStatistics, MatchWinner};

/// Outcome of one game from dark's side.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MatchResult {
    pub winner: Stone,
    /// Stone difference for dark with empty cells given to the winner.
    pub score: i32,
}

/// Both engines, one player per color.
struct Engines {
    engine1: [Box<dyn Player>; 2],
    engine2: [Box<dyn Player>; 2],
}

impl Engines {
    fn new(config: &Config, seed: u64) -> Result<Self> {
        let make = |level: &Level, color: Stone, offset: u64| {
            create_player(level, color, Some(seed.wrapping_add(offset)))
        };
        Ok(Self {
            engine1: [
                make(&config.engine1, Stone::Dark, 1)?,
                make(&config.engine1, Stone::Light, 2)?,
            ],
            engine2: [
                make(&config.engine2, Stone::Dark, 3)?,
                make(&config.engine2, Stone::Light, 4)?,
            ],
        })
    }

    /// Returns (dark, light) with engine 1 on `engine1_color`.
    fn seat(&mut self, engine1_color: Stone) -> (&mut dyn Player, &mut dyn Player) {
        let [e1_dark, e1_light] = &mut self.engine1;
        let [e2_dark, e2_light] = &mut self.engine2;
        match engine1_color {
            Stone::Dark => (e1_dark.as_mut(), e2_light.as_mut()),
            _ => (e2_dark.as_mut(), e1_light.as_mut()),
        }
    }
}

#[derive(Default)]
pub struct MatchRunner {
    display: DisplayManager,
}

impl MatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays `config.pairs` game pairs and prints the final results.
    ///
    /// # Errors
    ///
    /// Fails if an engine cannot be created, if an engine returns an illegal
    /// decision, or if the terminal cannot be written.
    pub fn run_match(&mut self, config: &Config) -> Result<()> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random_range(0..=u64::MAX));
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engines = Engines::new(config, seed)?;
        let names = (config.engine1.name, config.engine2.name);

        let mut statistics = MatchStatistics::new();
        self.display.show_match_header()?;
        self.display.update(&statistics, names.0, names.1)?;
        let progress_bar = self.display.create_progress_bar(u64::from(config.pairs) * 2);

        for pair in 0..config.pairs {
            let opening = random_opening(&mut rng, config.random_plies);
            if let Err(err) = self.play_pair(
                &mut engines,
                &mut statistics,
                &opening,
                &progress_bar,
                names,
            ) {
                progress_bar.finish_and_clear();
                return Err(err.context(format!("game pair {}", pair + 1)));
            }
        }

        progress_bar.finish_and_clear();
        self.display.clear_screen()?;
        println!("Seed: {seed}");
        statistics.print_final_results(names.0, names.1);
        Ok(())
    }

    fn play_pair(
        &self,
        engines: &mut Engines,
        statistics: &mut MatchStatistics,
        opening: &[Decision],
        progress_bar: &ProgressBar,
        names: (&str, &str),
    ) -> Result<()> {
        for engine1_color in [Stone::Dark, Stone::Light] {
            let (dark, light) = engines.seat(engine1_color);
            let result = play_game(dark, light, opening)?;
            statistics.add_result(to_record(result, engine1_color, opening));
            self.display.update(statistics, names.0, names.1)?;
            progress_bar.inc(1);
        }
        Ok(())
    }
}

/// Plays a game to the end after replaying `opening`.
pub fn play_game(
    dark: &mut dyn Player,
    light: &mut dyn Player,
    opening: &[Decision],
) -> Result<MatchResult> {
    let mut game = Game::new();
    for &decision in opening {
        if game.is_over() {
            break;
        }
        game.apply(decision).context("invalid opening")?;
    }

    while !game.is_over() {
        let player: &mut dyn Player = if game.next() == Stone::Dark {
            &mut *dark
        } else {
            &mut *light
        };
        let color = player.color();
        game.request(player).with_context(|| format!("{color} failed to move"))?;
    }

    let dark_count = game.count(Stone::Dark) as i32;
    let light_count = game.count(Stone::Light) as i32;
    let winner = game.winner();
    let score = match winner {
        Stone::Dark => 64 - 2 * light_count,
        Stone::Light => 2 * dark_count - 64,
        Stone::None => 0,
    };
    Ok(MatchResult { winner, score })
}

/// Picks up to `plies` uniformly random decisions from the initial position.
pub fn random_opening(rng: &mut StdRng, plies: u32) -> Vec<Decision> {
    let mut game = Game::new();
    let mut opening = Vec::new();
    for _ in 0..plies {
        if game.is_over() {
            break;
        }
        let decision = game
            .board()
            .legal_moves(game.next())
            .choose(rng)
            .map_or(Decision::Pass, Decision::Place);
        if game.apply(decision).is_err() {
            break;
        }
        opening.push(decision);
    }
    opening
}

fn to_record(result: MatchResult, engine1_color: Stone, opening: &[Decision]) -> GameRecord {
    let winner = if result.winner == Stone::None {
        MatchWinner::Draw
    } else if result.winner == engine1_color {
        MatchWinner::Engine1
    } else {
        MatchWinner::Engine2
    };
    let score = if engine1_color == Stone::Dark {
        result.score
    } else {
        -result.score
    };
    GameRecord {
        winner,
        score,
        opening: opening.iter().map(|d| d.to_string()).collect(),
        engine1_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_engine::get_level;

    #[test]
    fn test_random_opening_is_legal_and_reproducible() {
        let a = random_opening(&mut StdRng::seed_from_u64(9), 6);
        let b = random_opening(&mut StdRng::seed_from_u64(9), 6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);

        let mut game = Game::new();
        for decision in a {
            game.apply(decision).unwrap();
        }
    }

    #[test]
    fn test_play_game_scores_from_dark() {
        let level = get_level("random").unwrap();
        let mut dark = create_player(&level, Stone::Dark, Some(1)).unwrap();
        let mut light = create_player(&level, Stone::Light, Some(2)).unwrap();
        let result = play_game(dark.as_mut(), light.as_mut(), &[]).unwrap();
        match result.winner {
            Stone::Dark => assert!(result.score > 0),
            Stone::Light => assert!(result.score < 0),
            Stone::None => assert_eq!(result.score, 0),
        }
    }

    #[test]
    fn test_record_is_from_engine1_side() {
        let result = MatchResult {
            winner: Stone::Dark,
            score: 12,
        };
        let opening = [Decision::place(3, 2), Decision::place(2, 2)];

        let record = to_record(result, Stone::Dark, &opening);
        assert_eq!(record.winner, MatchWinner::Engine1);
        assert_eq!(record.score, 12);
        assert_eq!(record.opening, "d3c3");

        let record = to_record(result, Stone::Light, &opening);
        assert_eq!(record.winner, MatchWinner::Engine2);
        assert_eq!(record.score, -12);
    }

    #[test]
    fn test_engines_are_seated_by_color() {
        let config = Config {
            engine1: get_level("random").unwrap(),
            engine2: get_level("d2").unwrap(),
            pairs: 1,
            random_plies: 0,
            seed: Some(5),
        };
        let mut engines = Engines::new(&config, 5).unwrap();
        let (dark, light) = engines.seat(Stone::Light);
        assert_eq!(dark.color(), Stone::Dark);
        assert_eq!(light.color(), Stone::Light);
    }
}
