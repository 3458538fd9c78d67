//! Entropy-based guess scoring and selection
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, expected_remaining, shannon_entropy,
};
pub use selector::{GuessScore, narrow_pool, rank_guesses, select_best_guess};
