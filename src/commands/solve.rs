//! Word solving command
//!
//! Solves a specific or randomly drawn answer and returns the solution path.

use crate::core::Word;
use crate::solver::{SolveReport, Solver};
use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Solve `target` with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a word of the configured length
/// - The target is not among the answer words, so the candidates run out
pub fn solve_word(solver: &Solver<'_>, target: &str) -> Result<SolveReport> {
    let answer = Word::with_length(target, solver.config().word_length)
        .with_context(|| format!("invalid target word '{target}'"))?;

    let report = solver
        .solve(&answer)
        .with_context(|| format!("could not solve {answer}"))?;
    log::info!(
        "{answer}: {:?} after {} guesses",
        report.outcome,
        report.steps.len()
    );
    Ok(report)
}

/// Draw an answer uniformly from the answer words
///
/// # Errors
/// Returns an error if there are no answer words.
pub fn random_answer<'a, R: Rng + ?Sized>(answer_words: &'a [Word], rng: &mut R) -> Result<&'a Word> {
    match answer_words.choose(rng) {
        Some(word) => Ok(word),
        None => bail!("the answer list is empty"),
    }
}
