//! Wordle solving algorithms
//!
//! Candidate filtering, entropy-based guess selection, the solve loop, and
//! live-play sessions.

mod engine;
pub mod entropy;
pub mod filter;
mod session;

pub use engine::{SolveOutcome, SolveReport, SolveStep, Solver, best_guess};
pub use entropy::{GuessMetrics, GuessScore, expected_remaining};
pub use filter::{CandidateSet, filter_candidates, filter_one};
pub use session::Session;
