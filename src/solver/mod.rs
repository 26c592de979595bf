//! Brute-force Mastermind solving
//!
//! Candidates are walked in canonical order and each one consistent with every
//! clue so far is played as the next guess.

mod candidates;
mod clues;
mod game;

pub use candidates::{CANDIDATE_COUNT, Candidates};
pub use clues::{Clue, solution_matches_clues};
pub use game::{Game, GameConfig, GameObserver, GameResult, MAX_TRIES, Outcome, SilentObserver};
