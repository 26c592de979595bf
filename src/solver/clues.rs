//! Clue history and the consistency filter

use crate::core::{Code, Score, score_guess};

/// A past guess together with the score it earned against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    pub guess: Code,
    pub score: Score,
}

impl Clue {
    #[must_use]
    pub const fn new(guess: Code, score: Score) -> Self {
        Self { guess, score }
    }
}

/// Check whether `candidate` could still be the secret given every clue so far
///
/// A candidate survives if scoring each past guess against it reproduces the
/// recorded score. An empty history accepts everything.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, score_guess};
/// use mastermind_solver::solver::{Clue, solution_matches_clues};
///
/// let secret = Code::parse("RBGY").unwrap();
/// let guess = Code::parse("RGBY").unwrap();
/// let clues = [Clue::new(guess, score_guess(&guess, &secret))];
///
/// assert!(solution_matches_clues(&secret, &clues));
/// assert!(!solution_matches_clues(&guess, &clues));
/// ```
#[must_use]
pub fn solution_matches_clues(candidate: &Code, clues: &[Clue]) -> bool {
    clues
        .iter()
        .all(|clue| score_guess(candidate, &clue.guess) == clue.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Candidates;

    fn parse(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn empty_history_accepts_everything() {
        assert!(Candidates::new().all(|c| solution_matches_clues(&c, &[])));
    }

    #[test]
    fn rejects_inconsistent_candidate() {
        let clues = [Clue::new(parse("RGBY"), Score::new(0, 0))];

        assert!(solution_matches_clues(&parse("WAPC"), &clues));
        assert!(!solution_matches_clues(&parse("RAPC"), &clues));
    }

    #[test]
    fn every_clue_must_hold() {
        let secret = parse("PCRW");
        let clues: Vec<Clue> = ["RGBY", "WAPC", "CPWR"]
            .iter()
            .map(|g| {
                let guess = parse(g);
                Clue::new(guess, score_guess(&guess, &secret))
            })
            .collect();

        assert!(solution_matches_clues(&secret, &clues));

        let survivors: Vec<Code> = Candidates::new()
            .filter(|c| solution_matches_clues(c, &clues))
            .collect();
        assert!(survivors.contains(&secret));
        assert!(survivors.len() < 50);

        for survivor in &survivors {
            for clue in &clues {
                assert_eq!(score_guess(survivor, &clue.guess), clue.score);
            }
        }
    }
}
