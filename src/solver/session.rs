//! Live-play session
//!
//! Tracks one game as the player enters feedback: suggest a guess, record
//! what the game showed, undo a typo.

use super::Solver;
use super::entropy::GuessScore;
use super::filter::{CandidateSet, filter_candidates};
use crate::core::{Observation, Pattern, Word};
use crate::error::{Result, SolverError};

/// One game in progress, owning its own candidate set
#[derive(Debug, Clone)]
pub struct Session<'a> {
    solver: Solver<'a>,
    candidates: CandidateSet,
    history: Vec<Observation>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(solver: &Solver<'a>) -> Self {
        Self {
            candidates: solver.initial_candidates(),
            solver: solver.clone(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    /// Turn number of the next guess (1-based)
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    /// Whether the last recorded pattern was all Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|obs| obs.pattern.is_solved())
    }

    /// Recommended next guess
    ///
    /// # Errors
    /// Returns `SolverError::Inconsistent` when no candidate fits the history.
    pub fn suggest(&self) -> Result<GuessScore> {
        self.ensure_candidates()?;
        self.solver.best_guess(&self.candidates)
    }

    /// The `k` best next guesses, best first
    ///
    /// # Errors
    /// Returns `SolverError::Inconsistent` when no candidate fits the history.
    pub fn suggestions(&self, k: usize) -> Result<Vec<GuessScore>> {
        self.ensure_candidates()?;
        self.solver.ranked_guesses(&self.candidates, k)
    }

    fn ensure_candidates(&self) -> Result<()> {
        if !self.candidates.is_empty() {
            return Ok(());
        }
        let before_last = match self.history.split_last() {
            Some((_, earlier)) => filter_candidates(&self.solver.initial_candidates(), earlier).len(),
            None => 0,
        };
        Err(SolverError::Inconsistent {
            remaining: before_last,
        })
    }

    /// Record a guess and the feedback it got, returning the candidates left
    ///
    /// The observation is kept even when it empties the candidate set, so a
    /// mistyped pattern can be taken back with [`Session::undo`].
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if the guess or pattern has the wrong length
    /// - `SolverError::Inconsistent` if no candidate fits any more
    pub fn record(&mut self, guess: Word, pattern: Pattern) -> Result<usize> {
        self.solver.check_length(&guess)?;
        let observation = Observation::new(guess, pattern)?;

        let before = self.candidates.len();
        self.candidates.retain_observed(&observation);
        self.history.push(observation);

        log::debug!(
            "turn {}: {} candidates remain",
            self.history.len(),
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            return Err(SolverError::Inconsistent { remaining: before });
        }
        Ok(self.candidates.len())
    }

    /// Take back the last observation
    pub fn undo(&mut self) -> Option<Observation> {
        let undone = self.history.pop()?;
        self.candidates = filter_candidates(&self.solver.initial_candidates(), &self.history);
        Some(undone)
    }

    /// Start a new game with the same word lists and settings
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates = self.solver.initial_candidates();
    }
}
