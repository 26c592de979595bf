//! Mastermind Solver
//!
//! A brute-force Mastermind solver: every code consistent with the clues so far is
//! tried in canonical order until the secret is found or twelve clues are used up.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::Code;
//! use mastermind_solver::solver::{Game, GameConfig, SilentObserver};
//!
//! let secret = Code::parse("red green cyan pink").unwrap();
//! let result = Game::new(secret, GameConfig::default()).run(&mut SilentObserver);
//!
//! assert_eq!(result.solution(), Some(secret));
//! println!("Solved in {} guesses", result.num_guesses());
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
