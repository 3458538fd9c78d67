//! Word entropy command
//!
//! Measures the information a single guess gives against every answer.

use crate::core::Word;
use crate::solver::Solver;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use anyhow::{Context, Result};

/// Metrics of one word as an opening guess
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Whether the word is in the guess pool
    pub in_pool: bool,
}

impl EntropyResult {
    /// How many times smaller the candidate set is expected to get
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Measure `word` against the full answer list
///
/// Words outside the guess pool are still measured.
///
/// # Errors
/// Returns an error if `word` is not a word of the configured length.
pub fn word_entropy(solver: &Solver<'_>, word: &str) -> Result<EntropyResult> {
    let word = Word::with_length(word, solver.config().word_length)
        .with_context(|| format!("invalid word '{word}'"))?;

    let candidates = solver.answer_words();
    let in_pool = solver.guess_pool().contains(&word);
    if !in_pool {
        log::warn!("{word} is not in the guess pool");
    }

    Ok(EntropyResult {
        metrics: calculate_metrics(&word, candidates),
        total_candidates: candidates.len(),
        in_pool,
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::wordlists::builtin_words;

    #[test]
    fn entropy_of_known_word() {
        let words = builtin_words(5).unwrap();
        let solver = Solver::new(&words, &words, SolverConfig::default());

        let result = word_entropy(&solver, "crane").unwrap();

        assert_eq!(result.word.text(), "CRANE");
        assert!(result.in_pool);
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction() >= 1.0);
        assert_eq!(result.total_candidates, words.len());
    }

    #[test]
    fn entropy_properties() {
        let words = builtin_words(5).unwrap();
        let solver = Solver::new(&words, &words, SolverConfig::default());

        let result = word_entropy(&solver, "slate").unwrap();

        assert!(result.metrics.entropy <= (words.len() as f64).log2());
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= words.len() as f64);
        assert!(result.metrics.max_partition as f64 >= result.metrics.expected_remaining);
    }

    #[test]
    fn word_outside_pool_is_measured() {
        let words = builtin_words(5).unwrap();
        let solver = Solver::new(&words, &words, SolverConfig::default());

        let result = word_entropy(&solver, "qajaq").unwrap();
        assert!(!result.in_pool);
    }

    #[test]
    fn invalid_word_is_rejected() {
        let words = builtin_words(5).unwrap();
        let solver = Solver::new(&words, &words, SolverConfig::default());

        assert!(word_entropy(&solver, "zz").is_err());
    }
}
