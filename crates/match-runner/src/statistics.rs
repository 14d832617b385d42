//! Running totals for a match and the Elo estimate derived from them.

use colored::Colorize;
use reversi_engine::Stone;

const ELO_K: f64 = 400.0;
const RECENT_GAMES: usize = 5;

/// Which engine won a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    Engine1,
    Engine2,
    Draw,
}

/// One finished game as seen from engine 1.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: MatchWinner,
    /// Stone difference from engine 1's side.
    pub score: i32,
    pub opening: String,
    pub engine1_color: Stone,
}

#[derive(Debug, Clone, Default)]
pub struct MatchStatistics {
    pub engine1_wins: u32,
    pub engine2_wins: u32,
    pub draws: u32,
    pub total_score: i32,
    pub recent_results: Vec<GameRecord>,
}

impl MatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, record: GameRecord) {
        match record.winner {
            MatchWinner::Engine1 => self.engine1_wins += 1,
            MatchWinner::Engine2 => self.engine2_wins += 1,
            MatchWinner::Draw => self.draws += 1,
        }
        self.total_score += record.score;

        self.recent_results.push(record);
        if self.recent_results.len() > RECENT_GAMES {
            self.recent_results.remove(0);
        }
    }

    pub fn total_games(&self) -> u32 {
        self.engine1_wins + self.engine2_wins + self.draws
    }

    fn rate(&self, count: u32) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => count as f64 / total as f64 * 100.0,
        }
    }

    pub fn engine1_win_rate(&self) -> f64 {
        self.rate(self.engine1_wins)
    }

    pub fn engine2_win_rate(&self) -> f64 {
        self.rate(self.engine2_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn elo(&self) -> EloStats {
        EloStats::from_results(self.engine1_wins, self.engine2_wins, self.draws)
    }

    pub fn print_final_results(&self, engine1_name: &str, engine2_name: &str) {
        let total_games = self.total_games();
        if total_games == 0 {
            println!("No games were played.");
            return;
        }

        println!("{}", "═".repeat(60).bright_cyan());
        println!("{:^60}", "MATCH RESULTS".bright_white().bold());
        println!("{}", "═".repeat(60).bright_cyan());
        println!(
            "{} {}",
            "Total Games:".bright_white(),
            total_games.to_string().bright_yellow().bold()
        );
        println!(
            "{} {} / {} / {}",
            "Results:".bright_white(),
            format!("{} wins", self.engine1_wins).bright_green(),
            format!("{} draws", self.draws).bright_blue(),
            format!("{} losses", self.engine2_wins).bright_red()
        );
        println!();

        let width = engine1_name.len().max(engine2_name.len()).max(5);
        println!(
            "{:>width$}  {:>6.1}%",
            engine1_name.bright_cyan().bold(),
            self.engine1_win_rate()
        );
        println!("{:>width$}  {:>6.1}%", "Draws", self.draw_rate());
        println!(
            "{:>width$}  {:>6.1}%",
            engine2_name.bright_cyan().bold(),
            self.engine2_win_rate()
        );
        println!("{:>width$}  {:>+7}", "Stones", self.total_score);
        println!();

        let elo = self.elo();
        if elo.elo_diff.is_infinite() {
            let sign = if elo.elo_diff > 0.0 { "∞" } else { "-∞" };
            println!("{:>width$}  {}", "Elo", sign.bold());
        } else {
            println!(
                "{:>width$}  {} {}",
                "Elo",
                format!("{:+.2}", elo.elo_diff).bold(),
                format!("± {:.2} (95%)", elo.confidence_interval).bright_black()
            );
        }
        println!("{}", "═".repeat(60).bright_cyan());
    }
}

/// Elo difference of engine 1 over engine 2 with its 95% interval.
#[derive(Debug, Clone, Copy)]
pub struct EloStats {
    pub elo_diff: f64,
    pub confidence_interval: f64,
}

impl EloStats {
    pub fn from_results(wins: u32, losses: u32, draws: u32) -> EloStats {
        let total = wins + losses + draws;
        if total == 0 {
            return EloStats {
                elo_diff: 0.0,
                confidence_interval: 0.0,
            };
        }

        let n = total as f64;
        let (w, l, d) = (wins as f64, losses as f64, draws as f64);
        let p = (w + 0.5 * d) / n;

        if p == 0.0 || p == 1.0 {
            return EloStats {
                elo_diff: if p > 0.5 {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                },
                confidence_interval: f64::INFINITY,
            };
        }

        let elo_diff = ELO_K * (p / (1.0 - p)).log10();
        let variance = w * (1.0 - p).powi(2) + l * p.powi(2) + d * (0.5 - p).powi(2);
        let se = (ELO_K / (std::f64::consts::LN_10 * n)) * variance.sqrt() / (p * (1.0 - p));

        EloStats {
            elo_diff,
            confidence_interval: 1.96 * se,
        }
    }
}
