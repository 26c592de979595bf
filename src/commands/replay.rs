//! Replay every possible code as a secret
//!
//! Walks the canonical enumeration and plays one independent game per code.

use crate::solver::{Candidates, Game, GameConfig, GameObserver};
use log::info;

/// Configuration for a replay run
#[derive(Debug, Clone, Default)]
pub struct ReplayConfig {
    /// Stop after this many games
    pub limit: Option<usize>,
    pub game: GameConfig,
}

/// Tally of a replay run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub games: usize,
    pub solved: usize,
    pub total_guesses: usize,
}

impl ReplaySummary {
    /// Mean promoted guesses per game, failures included
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games as f64
        }
    }
}

/// Play one game for each code in canonical order
///
/// Games are numbered from 1. The observer is told about each game start before
/// the game runs and then receives that game's events.
pub fn run_replay<O: GameObserver + ?Sized>(
    config: &ReplayConfig,
    observer: &mut O,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    let secrets = Candidates::new().take(config.limit.unwrap_or(usize::MAX));
    for (number, secret) in secrets.enumerate().map(|(i, s)| (i + 1, s)) {
        observer.on_game_start(number, &secret);

        let result = Game::new(secret, config.game).run(observer);

        summary.games += 1;
        summary.total_guesses += result.num_guesses();
        if result.is_solved() {
            summary.solved += 1;
        }
    }

    info!(
        "Replay finished: {}/{} solved",
        summary.solved, summary.games
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Score};
    use crate::solver::Outcome;

    #[derive(Default)]
    struct StartRecorder {
        starts: Vec<(usize, Code)>,
        failures: usize,
    }

    impl GameObserver for StartRecorder {
        fn on_game_start(&mut self, game_number: usize, secret: &Code) {
            self.starts.push((game_number, *secret));
        }

        fn on_guess(&mut self, _guess_number: usize, _guess: &Code, _score: Score) {}

        fn on_failure(&mut self, _outcome: Outcome) {
            self.failures += 1;
        }
    }

    #[test]
    fn games_follow_canonical_order() {
        let config = ReplayConfig {
            limit: Some(5),
            ..ReplayConfig::default()
        };
        let mut recorder = StartRecorder::default();
        let summary = run_replay(&config, &mut recorder);

        assert_eq!(summary.games, 5);
        assert_eq!(summary.solved, 5);

        let expected: Vec<(usize, Code)> = Candidates::new()
            .take(5)
            .enumerate()
            .map(|(i, c)| (i + 1, c))
            .collect();
        assert_eq!(recorder.starts, expected);
    }

    #[test]
    fn first_game_needs_one_guess() {
        let config = ReplayConfig {
            limit: Some(1),
            ..ReplayConfig::default()
        };
        let summary = run_replay(&config, &mut crate::solver::SilentObserver);

        assert_eq!(
            summary,
            ReplaySummary {
                games: 1,
                solved: 1,
                total_guesses: 1,
            }
        );
    }

    #[test]
    fn average_guesses_over_games() {
        let summary = ReplaySummary {
            games: 4,
            solved: 4,
            total_guesses: 10,
        };
        assert!((summary.average_guesses() - 2.5).abs() < f64::EPSILON);
        assert!(ReplaySummary::default().average_guesses().abs() < f64::EPSILON);
    }

    #[test]
    fn replay_totals_match_individual_games() {
        let config = ReplayConfig {
            limit: Some(8),
            ..ReplayConfig::default()
        };
        let summary = run_replay(&config, &mut crate::solver::SilentObserver);

        let expected: usize = Candidates::new()
            .take(8)
            .map(|secret| {
                Game::new(secret, GameConfig::default())
                    .run(&mut crate::solver::SilentObserver)
                    .num_guesses()
            })
            .sum();
        assert_eq!(summary.total_guesses, expected);
        assert!(summary.average_guesses() >= 1.0);
    }

    #[test]
    fn failures_are_counted_not_fatal() {
        let config = ReplayConfig {
            limit: Some(3),
            game: GameConfig { max_tries: 1 },
        };
        let mut recorder = StartRecorder::default();
        let summary = run_replay(&config, &mut recorder);

        // Only the very first secret is found on the first guess
        assert_eq!(summary.games, 3);
        assert_eq!(summary.solved, 1);
        assert_eq!(recorder.failures, 2);
    }
}
