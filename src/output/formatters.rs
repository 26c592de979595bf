//! Formatting utilities for terminal output

use crate::core::{Code, Color, Score};
use colored::{ColoredString, Colorize};

/// Glyph drawn for each peg
pub const PEG: &str = "●";

/// Render one peg in its terminal style
///
/// Exhaustive over [`Color`], so a new color will not compile until it has a style.
#[must_use]
pub fn styled_peg(color: Color) -> ColoredString {
    match color {
        Color::Red => PEG.bright_red(),
        Color::Green => PEG.bright_green(),
        Color::Blue => PEG.bright_blue(),
        Color::Yellow => PEG.bright_yellow(),
        Color::White => PEG.bright_white(),
        Color::Grey => PEG.white(),
        Color::Pink => PEG.bright_magenta(),
        Color::Cyan => PEG.bright_cyan(),
    }
}

/// Format a code as a row of colored pegs
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&color| styled_peg(color).to_string())
        .collect()
}

/// Format a score as `correct almost`, exact matches in red
#[must_use]
pub fn format_score(score: Score) -> String {
    format!(
        "{} {}",
        score.num_correct.to_string().bright_red(),
        score.num_almost_correct.to_string().bright_white()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_one_peg_per_position() {
        let code = Code::parse("RGBY").unwrap();
        assert_eq!(format_code(&code).matches(PEG).count(), 4);
    }

    #[test]
    fn plain_output_without_colors() {
        colored::control::set_override(false);

        let code = Code::parse("WAPC").unwrap();
        assert_eq!(format_code(&code), "●●●●");
        assert_eq!(format_score(Score::new(1, 3)), "1 3");
    }

    #[test]
    fn every_color_has_a_style() {
        for color in Color::ALL {
            assert!(styled_peg(color).to_string().contains(PEG));
        }
    }
}
