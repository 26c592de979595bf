//! Guess feedback scoring
//!
//! A score is the pair of exact matches (right color, right position) and
//! near matches (right color, wrong position).

use super::code::{CODE_LEN, Code};
use std::fmt;

/// Feedback for a guess against an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub num_correct: u8,
    pub num_almost_correct: u8,
}

impl Score {
    /// Every peg in the right place
    pub const SOLVED: Self = Self::new(CODE_LEN as u8, 0);

    #[inline]
    #[must_use]
    pub const fn new(num_correct: u8, num_almost_correct: u8) -> Self {
        debug_assert!(num_correct as usize + num_almost_correct as usize <= CODE_LEN);
        Self {
            num_correct,
            num_almost_correct,
        }
    }

    /// Check if this score means the guess was the answer
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.num_correct as usize == CODE_LEN
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.num_correct, self.num_almost_correct)
    }
}

/// Score `guess` against `answer`
///
/// Near matches are counted as the guess colors present anywhere in the answer,
/// minus the exact matches. This ignores multiplicity, which is exact only because
/// [`Code`] never holds a repeated color.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Score, score_guess};
///
/// let guess = Code::parse("RGBY").unwrap();
/// let answer = Code::parse("RBGY").unwrap();
/// assert_eq!(score_guess(&guess, &answer), Score::new(2, 2));
/// ```
#[must_use]
pub fn score_guess(guess: &Code, answer: &Code) -> Score {
    let num_correct = guess
        .colors()
        .iter()
        .zip(answer.colors())
        .filter(|(g, a)| g == a)
        .count();

    let num_present = guess
        .colors()
        .iter()
        .filter(|&&color| answer.contains(color))
        .count();

    Score::new(num_correct as u8, (num_present - num_correct) as u8)
}
