//! Next-guess suggestion command
//!
//! Replays the observations of a game in progress and suggests what to play.

use crate::core::{Observation, Word};
use crate::solver::{GuessScore, Session, Solver};
use anyhow::{Context, Result};

/// Suggestions for the next guess of a game in progress
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Turn number of the suggested guess
    pub turn: usize,
    pub candidates: Vec<Word>,
    /// Best guesses first; empty once the game is solved
    pub guesses: Vec<GuessScore>,
    pub solved: bool,
}

/// Suggest the `count` best next guesses after `observations`
///
/// Each observation is written `WORD=PATTERN`, e.g. `crane=__Y_G`.
///
/// # Errors
///
/// Returns an error if:
/// - An observation cannot be parsed or has the wrong length
/// - The observations rule out every candidate
pub fn suggest_next<S: AsRef<str>>(solver: &Solver<'_>, observations: &[S], count: usize) -> Result<Suggestion> {
    let mut session = Session::new(solver);

    for text in observations {
        let text = text.as_ref();
        let observation: Observation = text
            .parse()
            .with_context(|| format!("invalid observation '{text}'"))?;
        let before = session.candidates().len();

        session
            .record(observation.guess, observation.pattern)
            .with_context(|| format!("{text} leaves none of the {before} candidates"))?;
    }

    let solved = session.is_solved();
    let guesses = if solved {
        Vec::new()
    } else {
        session.suggestions(count)?
    };

    Ok(Suggestion {
        turn: session.turn(),
        candidates: session.candidates().as_slice().to_vec(),
        guesses,
        solved,
    })
}
