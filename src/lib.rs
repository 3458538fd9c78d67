//! Wordle Coach
//!
//! An entropy-maximizing Wordle solver that also rates played games for
//! skill and luck.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_coach::core::{Pattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &answer).unwrap();
//! assert_eq!(pattern.to_string(), "__G_G");
//! ```
//!
//! Solving and analyzing a game:
//!
//! ```rust
//! use wordle_coach::analysis::Analyzer;
//! use wordle_coach::config::SolverConfig;
//! use wordle_coach::core::Word;
//! use wordle_coach::solver::Solver;
//! use wordle_coach::wordlists::builtin_words;
//!
//! let words = builtin_words(5).unwrap();
//! let solver = Solver::new(&words, &words, SolverConfig::default());
//! let answer = Word::new("house").unwrap();
//!
//! let played = solver.solve(&answer).unwrap();
//! let report = Analyzer::from_solver(&solver)
//!     .analyze(&answer, &played.guesses())
//!     .unwrap();
//! assert!(report.steps.iter().all(|step| step.skill == 99));
//! ```

// Core domain types
pub mod core;

// Error type and solver settings
pub mod config;
pub mod error;

// Solving algorithms
pub mod solver;

// Skill and luck ratings
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use config::SolverConfig;
pub use error::{Result, SolverError};
