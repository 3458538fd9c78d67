//! Error type shared by every core operation

use thiserror::Error;

/// Result alias for core solver operations
pub type Result<T, E = SolverError> = std::result::Result<T, E>;

/// Typed failures of the pattern engine, filter, selector and analyzer
///
/// None of these are fatal to the host: each one is returned to the caller,
/// which decides whether to retry with different input or restart the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Malformed word, pattern text, or mismatched lengths
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Selection was asked to pick from an empty candidate set or guess pool
    #[error("no candidates to choose from")]
    NoCandidates,

    /// An observation ruled out every candidate
    ///
    /// `remaining` is how many candidates were left just before it.
    #[error("feedback is inconsistent: it rules out all {remaining} remaining candidates")]
    Inconsistent { remaining: usize },

    /// The solve loop used every allowed guess without finding the answer
    #[error("answer not found within {attempts} guesses")]
    ExhaustedAttempts { attempts: usize },
}

impl SolverError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
