//! Core domain types for Mastermind
//!
//! Colors, codes and the scoring rule. Nothing here knows about solving or output.

mod code;
mod color;
mod score;

pub use code::{CODE_LEN, Code, CodeError};
pub use color::{Color, NUM_COLORS};
pub use score::{Score, score_guess};
