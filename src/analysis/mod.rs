//! Game analysis
//!
//! Rates the skill and luck of a played game.

mod analyzer;
mod rating;

pub use analyzer::{AnalysisReport, Analyzer, GameComparison, StepAnalysis, analyze_game};
pub use rating::{
    LUCK_SPAN_BITS, MAX_RATING, NEUTRAL_LUCK, WASTED_GUESS_SKILL, game_luck, skill_rating,
    step_luck,
};
