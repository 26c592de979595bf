//! Command implementations

pub mod play;
pub mod replay;
pub mod test_all;

pub use play::{PlayConfig, PlayResult, choose_secret, run_play};
pub use replay::{ReplayConfig, ReplaySummary, run_replay};
pub use test_all::{TestAllStatistics, run_test_all};
