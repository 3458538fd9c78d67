//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_entropy_result, print_game_comparison, print_solve_report,
    print_suggestion,
};
