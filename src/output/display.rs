//! Console printing for games and command results

use super::formatters::{format_code, format_score};
use crate::commands::{PlayResult, ReplaySummary, TestAllStatistics};
use crate::core::{Code, Score};
use crate::solver::{GameObserver, MAX_TRIES, Outcome};
use colored::Colorize;

/// Printed when a game ends without finding the secret
pub const FAILURE_LINE: &str = "Couldn't find an answer :(";

/// Line announcing a new game, optionally revealing its secret
#[must_use]
pub fn game_header_line(game_number: usize, secret: Option<&Code>) -> String {
    match secret {
        Some(code) => format!("Game number {game_number}, Selected code is {}", format_code(code)),
        None => format!("Game number {game_number}"),
    }
}

/// Line reporting one promoted guess
#[must_use]
pub fn guess_line(guess_number: usize, guess: &Code, score: Score) -> String {
    format!(
        "Guess #{guess_number}: {}  Clue: {}",
        format_code(guess),
        format_score(score)
    )
}

/// Observer that prints every game event to stdout
#[derive(Debug, Clone, Copy)]
pub struct ConsoleObserver {
    reveal_secret: bool,
}

impl ConsoleObserver {
    #[must_use]
    pub const fn new(reveal_secret: bool) -> Self {
        Self { reveal_secret }
    }

    /// Game announcement, showing the secret only when revealing is on
    #[must_use]
    pub fn header_for(&self, game_number: usize, secret: &Code) -> String {
        game_header_line(game_number, self.reveal_secret.then_some(secret))
    }
}

impl GameObserver for ConsoleObserver {
    fn on_game_start(&mut self, game_number: usize, secret: &Code) {
        println!("{}", self.header_for(game_number, secret));
    }

    fn on_guess(&mut self, guess_number: usize, guess: &Code, score: Score) {
        println!("{}", guess_line(guess_number, guess, score));
    }

    fn on_failure(&mut self, _outcome: Outcome) {
        println!("{FAILURE_LINE}");
    }
}

/// Print the tally after replaying games
pub fn print_replay_summary(summary: &ReplaySummary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replayed {} games: {} solved, {} failed",
        summary.games,
        summary.solved.to_string().green(),
        (summary.games - summary.solved).to_string().red()
    );
    println!(
        "Average guesses: {}",
        format!("{:.3}", summary.average_guesses())
            .bright_yellow()
            .bold()
    );
}

/// Print the result of a single game
pub fn print_play_result(result: &PlayResult) {
    println!();
    if result.game.is_solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.game.num_guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{} (secret was {})",
            format!("❌ Failed to solve in {} guesses", result.game.num_guesses())
                .red()
                .bold(),
            format_code(&result.secret)
        );
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total games:         {}", stats.total_games);
    if stats.total_games == 0 {
        return;
    }

    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_games as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Fewest / most:       {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=MAX_TRIES {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if count == 0 && guesses > stats.max_guesses {
            continue;
        }
        let percentage = count as f64 / stats.total_games as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in &stats.hardest {
            println!("  {} {secret} ({guesses} guesses)", format_code(secret));
        }
    }
}
