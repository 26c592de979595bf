//! Canonical enumeration of every possible code
//!
//! Codes are the 4-permutations of [`Color::ALL`], which come out in
//! lexicographic order over the color list.

use crate::core::{CODE_LEN, Code, Color, NUM_COLORS};
use itertools::{Itertools, Permutations};
use std::array;

/// Number of codes with four distinct colors out of eight (8 × 7 × 6 × 5)
pub const CANDIDATE_COUNT: usize = 1680;

/// Lazy iterator over all codes in canonical order
///
/// Each call to [`Candidates::new`] starts over from the first code.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::{CANDIDATE_COUNT, Candidates};
///
/// let mut candidates = Candidates::new();
/// assert_eq!(candidates.next().unwrap().to_string(), "RGBY");
/// assert_eq!(candidates.next().unwrap().to_string(), "RGBW");
/// assert_eq!(Candidates::new().count(), CANDIDATE_COUNT);
/// ```
#[derive(Debug, Clone)]
pub struct Candidates {
    permutations: Permutations<array::IntoIter<Color, NUM_COLORS>>,
    emitted: usize,
}

impl Candidates {
    #[must_use]
    pub fn new() -> Self {
        Self {
            permutations: Color::ALL.into_iter().permutations(CODE_LEN),
            emitted: 0,
        }
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Candidates {
    type Item = Code;

    fn next(&mut self) -> Option<Self::Item> {
        let pegs = self.permutations.next()?;
        self.emitted += 1;
        Some(Code::from_distinct(&pegs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CANDIDATE_COUNT - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates {}

impl std::iter::FusedIterator for Candidates {}
