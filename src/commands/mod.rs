//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod entropy;
pub mod solve;
pub mod suggest;

pub use analyze::analyze_guesses;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use entropy::{EntropyResult, word_entropy};
pub use solve::{random_answer, solve_word};
pub use suggest::{Suggestion, suggest_next};
