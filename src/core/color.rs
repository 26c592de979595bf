//! Peg colors
//!
//! The color set is fixed at eight values. Their declaration order is the canonical
//! order used by the candidate enumerator, so reordering variants changes guess numbering.

use std::fmt;
use std::str::FromStr;

/// Number of distinct peg colors
pub const NUM_COLORS: usize = 8;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Grey,
    Pink,
    Cyan,
}

impl Color {
    /// Every color in canonical order
    pub const ALL: [Self; NUM_COLORS] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::White,
        Self::Grey,
        Self::Pink,
        Self::Cyan,
    ];

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Grey => "grey",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
        }
    }

    /// One-letter symbol used for compact code notation
    ///
    /// Grey is `A` (as in "grAy") since `G` is taken by green.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::White => 'W',
            Self::Grey => 'A',
            Self::Pink => 'P',
            Self::Cyan => 'C',
        }
    }

    /// Parse a one-letter symbol, case-insensitive
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let upper = symbol.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.symbol() == upper)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts a full name (`"pink"`, `"gray"`) or a symbol (`"P"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        if lower == "gray" {
            return Ok(Self::Grey);
        }

        if let Some(color) = Self::ALL.into_iter().find(|c| c.name() == lower) {
            return Ok(color);
        }

        let mut chars = lower.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && let Some(color) = Self::from_symbol(ch)
        {
            return Ok(color);
        }

        Err(format!("Unknown color: {s}"))
    }
}
