//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    ConsoleObserver, print_play_result, print_replay_summary, print_test_all_statistics,
};
