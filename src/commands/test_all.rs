//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver silently against every possible secret and gathers statistics.

use crate::core::Code;
use crate::solver::{CANDIDATE_COUNT, Candidates, Game, GameConfig, SilentObserver};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How many of the slowest secrets to keep
const HARDEST_KEPT: usize = 5;

/// Statistics from testing every secret
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Promoted guesses → number of solved games
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Secrets needing the most guesses, worst first
    pub hardest: Vec<(Code, usize)>,
    pub failures: Vec<Code>,
}

/// Run the solver on every secret (or the first `limit` in canonical order)
///
/// Shows a progress bar on stderr while running.
#[must_use]
pub fn run_test_all(config: GameConfig, limit: Option<usize>) -> TestAllStatistics {
    let total = limit.map_or(CANDIDATE_COUNT, |l| l.min(CANDIDATE_COUNT));

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved_counts: Vec<(Code, usize)> = Vec::with_capacity(total);
    let mut failures = Vec::new();

    for (idx, secret) in Candidates::new().take(total).enumerate() {
        let result = Game::new(secret, config).run(&mut SilentObserver);

        if result.is_solved() {
            *guess_distribution.entry(result.num_guesses()).or_insert(0) += 1;
            solved_counts.push((secret, result.num_guesses()));
        } else {
            failures.push(secret);
        }

        if idx % 50 == 0 && !solved_counts.is_empty() {
            let avg = solved_counts.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_counts.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    let min_guesses = solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let max_guesses = solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    // Stable sort keeps canonical order among ties
    let mut hardest = solved_counts;
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(HARDEST_KEPT);

    TestAllStatistics {
        total_games: total,
        solved,
        failed: failures.len(),
        guess_distribution,
        total_time: start.elapsed(),
        average_guesses,
        min_guesses,
        max_guesses,
        hardest,
        failures,
    }
}
