//! Solver configuration
//!
//! Passed explicitly into [`crate::solver::Solver`], [`crate::solver::Session`] and
//! [`crate::analysis::Analyzer`]; nothing here is process-wide state.

use std::time::Duration;

/// Settings shared by solve, live-play and analysis sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Letters per word (default: 5)
    pub word_length: usize,

    /// Only guess words that are still candidates (default: false)
    pub hard_mode: bool,

    /// Guesses allowed before the solve loop gives up (default: 6)
    pub max_guesses: usize,

    /// Evaluate at most this many non-candidate pool words per round (default: all)
    pub pool_limit: Option<usize>,

    /// Wall-clock budget for a whole solve, checked between rounds (default: none)
    pub time_budget: Option<Duration>,

    /// Alternatives listed for a weak analyzed guess (default: 3)
    pub alternatives: usize,

    /// Analyzed guesses with skill below this get alternatives (default: 90)
    pub quality_threshold: u8,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            hard_mode: false,
            max_guesses: 6,
            pool_limit: None,
            time_budget: None,
            alternatives: 3,
            quality_threshold: 90,
        }
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_pool_limit(mut self, pool_limit: Option<usize>) -> Self {
        self.pool_limit = pool_limit;
        self
    }

    #[must_use]
    pub const fn with_time_budget(mut self, time_budget: Option<Duration>) -> Self {
        self.time_budget = time_budget;
        self
    }

    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: usize) -> Self {
        self.alternatives = alternatives;
        self
    }

    #[must_use]
    pub const fn with_quality_threshold(mut self, quality_threshold: u8) -> Self {
        self.quality_threshold = quality_threshold;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(5)
    }
}
