//! Live terminal view of a running match.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use reversi_engine::Stone;

use crate::statistics::{MatchStatistics, MatchWinner};

const BAR_WIDTH: usize = 50;
const NAME_WIDTH: usize = 8;
const RESERVED_LINES: usize = 14;
const MAX_OPENING_LEN: usize = 16;
const VISUALIZATION_START_LINE: &str = "\x1B[3;1H";
const CLEAR_LINE: &str = "\x1B[2K";
const SAVE_CURSOR: &str = "\x1B[s";
const RESTORE_CURSOR: &str = "\x1B[u";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Default)]
pub struct DisplayManager;

impl DisplayManager {
    pub fn new() -> Self {
        Self
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        print!("{CLEAR_SCREEN}");
        io::stdout().flush()
    }

    /// Clears the screen and leaves room for the live view above the progress bar.
    pub fn show_match_header(&self) -> io::Result<()> {
        self.clear_screen()?;
        for _ in 0..RESERVED_LINES {
            println!();
        }
        Ok(())
    }

    pub fn create_progress_bar(&self, total_games: u64) -> ProgressBar {
        let progress_bar = ProgressBar::new(total_games);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%)")
        {
            progress_bar.set_style(style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        progress_bar
    }

    /// Redraws the live view in place without scrolling.
    pub fn update(&self, stats: &MatchStatistics, engine1: &str, engine2: &str) -> io::Result<()> {
        print!("{SAVE_CURSOR}{VISUALIZATION_START_LINE}");

        println!(
            "{CLEAR_LINE}  {} vs {}",
            engine1.bright_cyan().bold(),
            engine2.bright_cyan().bold()
        );
        let separator = "─".repeat(BAR_WIDTH + NAME_WIDTH + 15);
        println!("{CLEAR_LINE}  {}", separator.bright_black());

        self.print_bar("Engine1", stats.engine1_wins, stats.engine1_win_rate(), |s| {
            s.bright_green()
        });
        self.print_bar("Draws", stats.draws, stats.draw_rate(), |s| s.bright_blue());
        self.print_bar("Engine2", stats.engine2_wins, stats.engine2_win_rate(), |s| {
            s.bright_red()
        });

        println!("{CLEAR_LINE}  {}", separator.bright_black());
        println!("{CLEAR_LINE}  {:>NAME_WIDTH$}: {:+}", "Stones", stats.total_score);
        println!("{CLEAR_LINE}");
        println!("{CLEAR_LINE}  {}", "Recent Games:".bright_black());

        let first = stats.total_games() as usize + 1 - stats.recent_results.len();
        for (idx, game) in stats.recent_results.iter().enumerate() {
            println!(
                "{CLEAR_LINE}  {:>5}: {} {} {} {}",
                (first + idx).to_string().bright_black(),
                format_result(game.winner),
                format_score(game.score, game.winner),
                format_opening(&game.opening).bright_black(),
                format_colors(game.engine1_color).bright_black()
            );
        }

        print!("{RESTORE_CURSOR}");
        io::stdout().flush()
    }

    fn print_bar(
        &self,
        label: &str,
        count: u32,
        percentage: f64,
        paint: fn(&str) -> ColoredString,
    ) {
        let filled = ((percentage / 100.0) * BAR_WIDTH as f64) as usize;
        let filled = filled.min(BAR_WIDTH);
        println!(
            "{CLEAR_LINE}  {:>NAME_WIDTH$} {}{} {:>6.1}% ({:>4})",
            label,
            paint(&"█".repeat(filled)),
            "░".repeat(BAR_WIDTH - filled).bright_black(),
            percentage,
            count
        );
    }
}

fn format_result(winner: MatchWinner) -> ColoredString {
    match winner {
        MatchWinner::Engine1 => "W".bright_green().bold(),
        MatchWinner::Engine2 => "L".bright_red().bold(),
        MatchWinner::Draw => "D".bright_blue().bold(),
    }
}

fn format_score(score: i32, winner: MatchWinner) -> ColoredString {
    let text = format!("{score:+3}");
    match winner {
        MatchWinner::Engine1 => text.bright_green(),
        MatchWinner::Engine2 => text.bright_red(),
        MatchWinner::Draw => text.bright_blue(),
    }
}

fn format_opening(opening: &str) -> String {
    if opening.len() > MAX_OPENING_LEN {
        format!("{}...", &opening[..MAX_OPENING_LEN])
    } else {
        opening.to_string()
    }
}

fn format_colors(engine1_color: Stone) -> &'static str {
    match engine1_color {
        Stone::Dark => "X Engine1 vs Engine2 O",
        _ => "O Engine1 vs Engine2 X",
    }
}
