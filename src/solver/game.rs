//! One Mastermind session against a fixed secret
//!
//! A [`Game`] owns its clue history and guess counter. Running it consumes the game,
//! so nothing from a session outlives its [`GameResult`].

use super::candidates::Candidates;
use super::clues::{Clue, solution_matches_clues};
use crate::core::{Code, Score, score_guess};
use log::{debug, info};

/// Maximum number of clues collected before a game gives up
pub const MAX_TRIES: usize = 12;

/// Tunable limits for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_tries: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: MAX_TRIES,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The secret was guessed
    Solved(Code),
    /// `max_tries` clues were collected without a match
    Exhausted,
    /// Candidates ran out before either of the above
    Depleted,
}

/// Receives progress from a running game
///
/// This is where presentation hooks in; the solver itself never formats anything.
pub trait GameObserver {
    /// Called by drivers before a game starts. [`Game`] itself never calls this.
    fn on_game_start(&mut self, _game_number: usize, _secret: &Code) {}

    /// Called once for every candidate promoted to a guess
    fn on_guess(&mut self, guess_number: usize, guess: &Code, score: Score);

    /// Called when a game ends without finding the secret
    fn on_failure(&mut self, outcome: Outcome);
}

/// Observer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl GameObserver for SilentObserver {
    fn on_guess(&mut self, _guess_number: usize, _guess: &Code, _score: Score) {}

    fn on_failure(&mut self, _outcome: Outcome) {}
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// Every promoted guess in order, including the winning one
    pub guesses: Vec<Clue>,
    /// Candidates pulled from the enumerator, promoted or not
    pub candidates_considered: usize,
}

impl GameResult {
    /// The discovered secret, if any
    #[must_use]
    pub const fn solution(&self) -> Option<Code> {
        match self.outcome {
            Outcome::Solved(code) => Some(code),
            Outcome::Exhausted | Outcome::Depleted => None,
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }

    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// One-line log summary of a finished game
///
/// Leaves the secret out so hidden-secret runs stay hidden at any log level.
fn outcome_summary(outcome: Outcome, num_guesses: usize, considered: usize) -> String {
    match outcome {
        Outcome::Solved(_) => {
            format!("Solved in {num_guesses} guesses ({considered} candidates considered)")
        }
        Outcome::Exhausted | Outcome::Depleted => format!(
            "Failed with {outcome:?} after {num_guesses} clues ({considered} candidates considered)"
        ),
    }
}

/// A single solving session
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::{Game, GameConfig, SilentObserver};
///
/// let secret = Code::parse("PCRW").unwrap();
/// let result = Game::new(secret, GameConfig::default()).run(&mut SilentObserver);
///
/// assert_eq!(result.solution(), Some(secret));
/// assert!(result.num_guesses() <= 12);
/// ```
#[derive(Debug)]
pub struct Game {
    secret: Code,
    config: GameConfig,
    clues: Vec<Clue>,
    guess_number: usize,
}

impl Game {
    #[must_use]
    pub fn new(secret: Code, config: GameConfig) -> Self {
        Self {
            secret,
            config,
            clues: Vec::with_capacity(config.max_tries),
            guess_number: 1,
        }
    }

    /// Solve over every code in canonical order
    pub fn run<O: GameObserver + ?Sized>(self, observer: &mut O) -> GameResult {
        self.run_over(Candidates::new(), observer)
    }

    /// Solve over a caller-supplied candidate sequence
    ///
    /// Candidates inconsistent with the clues so far are skipped without being
    /// guessed. The secret is consulted only to score promoted candidates.
    pub fn run_over<I, O>(mut self, candidates: I, observer: &mut O) -> GameResult
    where
        I: IntoIterator<Item = Code>,
        O: GameObserver + ?Sized,
    {
        let mut considered = 0;

        let outcome = if self.config.max_tries == 0 {
            Outcome::Exhausted
        } else {
            self.search(candidates, observer, &mut considered)
        };

        if let Outcome::Solved(code) = outcome {
            self.clues.push(Clue::new(code, Score::SOLVED));
        } else {
            observer.on_failure(outcome);
        }
        info!("{}", outcome_summary(outcome, self.clues.len(), considered));

        GameResult {
            outcome,
            guesses: self.clues,
            candidates_considered: considered,
        }
    }

    fn search<I, O>(
        &mut self,
        candidates: I,
        observer: &mut O,
        considered: &mut usize,
    ) -> Outcome
    where
        I: IntoIterator<Item = Code>,
        O: GameObserver + ?Sized,
    {
        let mut skipped = 0;

        for candidate in candidates {
            *considered += 1;

            if !solution_matches_clues(&candidate, &self.clues) {
                skipped += 1;
                continue;
            }

            let score = score_guess(&candidate, &self.secret);
            debug!(
                "Guess #{} {candidate} scored {score} after skipping {skipped} candidates",
                self.guess_number
            );
            observer.on_guess(self.guess_number, &candidate, score);
            skipped = 0;

            if score.is_solved() {
                return Outcome::Solved(candidate);
            }

            self.clues.push(Clue::new(candidate, score));
            self.guess_number += 1;

            if self.clues.len() >= self.config.max_tries {
                return Outcome::Exhausted;
            }
        }

        Outcome::Depleted
    }
}
