//! A played guess together with the feedback it received

use super::{Pattern, Word};
use crate::error::{Result, SolverError};
use std::fmt;

/// One step of a game's constraint history
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Observation {
    pub guess: Word,
    pub pattern: Pattern,
}

impl Observation {
    /// Pair a guess with its feedback
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the pattern length differs from the guess.
    pub fn new(guess: Word, pattern: Pattern) -> Result<Self> {
        if guess.len() != pattern.len() {
            return Err(SolverError::invalid(format!(
                "pattern '{pattern}' does not fit guess '{guess}'"
            )));
        }
        Ok(Self { guess, pattern })
    }

    /// Record what `guess` would show against `answer`
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the words differ in length.
    pub fn against(guess: Word, answer: &Word) -> Result<Self> {
        let pattern = Pattern::calculate(&guess, answer)?;
        Ok(Self { guess, pattern })
    }

    /// Whether `candidate` would have produced this same feedback
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        candidate.len() == self.guess.len()
            && Pattern::compute(&self.guess, candidate) == self.pattern
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.guess, self.pattern)
    }
}

impl std::str::FromStr for Observation {
    type Err = SolverError;

    /// Parse `WORD=PATTERN`, e.g. `CRANE=__G_G`
    fn from_str(s: &str) -> Result<Self> {
        let (word, pattern) = s
            .split_once('=')
            .ok_or_else(|| SolverError::invalid(format!("expected WORD=PATTERN, got '{s}'")))?;
        Self::new(Word::new(word.trim())?, pattern.parse()?)
    }
}
