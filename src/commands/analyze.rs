//! Game analysis command
//!
//! Rates a played game and solves the same answer for comparison.

use crate::analysis::{Analyzer, GameComparison};
use crate::core::Word;
use crate::solver::Solver;
use anyhow::{Context, Result};

/// Analyze the guesses of a played game against its answer
///
/// # Errors
///
/// Returns an error if:
/// - The answer or a guess is not a word of the configured length
/// - The feedback of the guesses rules out every candidate
pub fn analyze_guesses<S: AsRef<str>>(
    solver: &Solver<'_>,
    answer: &str,
    guesses: &[S],
) -> Result<GameComparison> {
    let length = solver.config().word_length;
    let answer = Word::with_length(answer, length).with_context(|| format!("invalid answer '{answer}'"))?;
    let guesses = guesses
        .iter()
        .map(|guess| {
            let guess = guess.as_ref();
            Word::with_length(guess, length).with_context(|| format!("invalid guess '{guess}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let comparison = Analyzer::from_solver(solver)
        .compare_with_optimal(&answer, &guesses)
        .with_context(|| format!("could not analyze the game for {answer}"))?;
    log::info!(
        "analyzed {} guesses for {answer}: skill {:.1}, luck {}",
        comparison.player.steps.len(),
        comparison.player.average_skill,
        comparison.player.luck
    );
    Ok(comparison)
}
