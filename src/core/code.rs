//! Mastermind code representation
//!
//! A Code is an ordered sequence of four distinct colors.

use super::color::Color;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LEN: usize = 4;

/// An ordered sequence of [`CODE_LEN`] distinct colors
///
/// Construction validates length and uniqueness, so every `Code` in existence
/// satisfies both invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([Color; CODE_LEN]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    UnknownColor(String),
    DuplicateColor(Color),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LEN} colors, got {len}")
            }
            Self::UnknownColor(token) => write!(f, "Unknown color '{token}'"),
            Self::DuplicateColor(color) => write!(f, "Color {color} appears more than once"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a slice of colors
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly [`CODE_LEN`]
    /// - Any color is repeated
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, CodeError, Color};
    ///
    /// let code = Code::new(&[Color::Red, Color::Green, Color::Blue, Color::Yellow]).unwrap();
    /// assert_eq!(code.to_string(), "RGBY");
    ///
    /// assert_eq!(
    ///     Code::new(&[Color::Red, Color::Red, Color::Blue, Color::Yellow]),
    ///     Err(CodeError::DuplicateColor(Color::Red))
    /// );
    /// ```
    pub fn new(colors: &[Color]) -> Result<Self, CodeError> {
        let pegs: [Color; CODE_LEN] = colors
            .try_into()
            .map_err(|_| CodeError::InvalidLength(colors.len()))?;

        for (i, color) in pegs.iter().enumerate() {
            if pegs[..i].contains(color) {
                return Err(CodeError::DuplicateColor(*color));
            }
        }

        Ok(Self(pegs))
    }

    /// Build a code from exactly [`CODE_LEN`] pegs already known to be distinct
    pub(crate) fn from_distinct(colors: &[Color]) -> Self {
        let mut pegs = [Color::Red; CODE_LEN];
        pegs.copy_from_slice(colors);
        Self(pegs)
    }

    /// Parse a code from text
    ///
    /// Accepts either four symbols run together (`"RGBY"`) or color names separated by
    /// commas or whitespace (`"red, green, blue, yellow"`). Case-insensitive.
    ///
    /// # Errors
    /// Returns `CodeError` if the text does not describe exactly four known, distinct colors.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let a = Code::parse("rgby").unwrap();
    /// let b = Code::parse("Red, green blue,YELLOW").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let trimmed = text.trim();
        let is_delimited = trimmed.contains(|c: char| c == ',' || c.is_whitespace());

        let colors = if is_delimited {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token
                        .parse::<Color>()
                        .map_err(|_| CodeError::UnknownColor(token.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            trimmed
                .chars()
                .map(|ch| {
                    Color::from_symbol(ch).ok_or_else(|| CodeError::UnknownColor(ch.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Self::new(&colors)
    }

    /// Pick a random code by shuffling every color and keeping the first four
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut colors = Color::ALL;
        colors.shuffle(rng);
        Self::from_distinct(&colors[..CODE_LEN])
    }

    /// Get the pegs in order
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LEN] {
        &self.0
    }

    /// Check if the code contains a specific color anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.0 {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::core::Color::{Blue, Cyan, Green, Grey, Pink, Red, White, Yellow};

    #[test]
    fn code_creation_valid() {
        let code = Code::new(&[Red, Green, Blue, Yellow]).unwrap();
        assert_eq!(code.colors(), &[Red, Green, Blue, Yellow]);
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(
            Code::new(&[Red, Green, Blue]),
            Err(CodeError::InvalidLength(3))
        );
        assert_eq!(
            Code::new(&[Red, Green, Blue, Yellow, White]),
            Err(CodeError::InvalidLength(5))
        );
        assert_eq!(Code::new(&[]), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_creation_rejects_duplicates() {
        assert_eq!(
            Code::new(&[Red, Green, Blue, Green]),
            Err(CodeError::DuplicateColor(Green))
        );
        assert_eq!(
            Code::new(&[Cyan, Cyan, Cyan, Cyan]),
            Err(CodeError::DuplicateColor(Cyan))
        );
    }

    #[test]
    fn parse_symbols() {
        let code = Code::parse("wapc").unwrap();
        assert_eq!(code.colors(), &[White, Grey, Pink, Cyan]);
    }

    #[test]
    fn parse_names() {
        let code: Code = "pink cyan, red,gray".parse().unwrap();
        assert_eq!(code.colors(), &[Pink, Cyan, Red, Grey]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Code::parse("RGB"), Err(CodeError::InvalidLength(3)));
        assert_eq!(Code::parse("RGBYW"), Err(CodeError::InvalidLength(5)));
        assert_eq!(
            Code::parse("RGBX"),
            Err(CodeError::UnknownColor("X".to_string()))
        );
        assert_eq!(
            Code::parse("red green orange blue"),
            Err(CodeError::UnknownColor("orange".to_string()))
        );
        assert_eq!(Code::parse("RGBR"), Err(CodeError::DuplicateColor(Red)));
        assert_eq!(Code::parse(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let code = Code::new(&[Grey, Yellow, Cyan, Green]).unwrap();
        assert_eq!(code.to_string(), "AYCG");
        assert_eq!(Code::parse(&code.to_string()), Ok(code));
    }

    #[test]
    fn random_codes_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = Code::random(&mut rng);
            assert_eq!(Code::new(code.colors()), Ok(code));
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let a = Code::random(&mut StdRng::seed_from_u64(42));
        let b = Code::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn contains_color() {
        let code = Code::parse("RGBY").unwrap();
        assert!(code.contains(Red));
        assert!(!code.contains(Pink));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CodeError::InvalidLength(2).to_string(),
            "Code must be exactly 4 colors, got 2"
        );
        assert_eq!(
            CodeError::DuplicateColor(Blue).to_string(),
            "Color blue appears more than once"
        );
    }
}
