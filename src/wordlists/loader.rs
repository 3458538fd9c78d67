//! Word list loading utilities
//!
//! Parses one-word-per-line lists from files or the embedded constant.

use super::BUILTIN_WORDS;
use crate::core::Word;
use crate::error::{Result, SolverError};
use anyhow::Context;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse a word list of `length`-letter words
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Words are uppercased and later duplicates dropped.
///
/// # Errors
/// Returns `SolverError::InvalidInput` naming the 1-based line of the first
/// entry with the wrong length or a non-letter.
///
/// # Examples
/// ```
/// use wordle_coach::wordlists::words_from_lines;
///
/// let words = words_from_lines("# openers\ncrane\n\nSlate\ncrane\n", 5).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
/// ```
pub fn words_from_lines(text: &str, length: usize) -> Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }

        let word = Word::with_length(entry, length).map_err(|err| match err {
            SolverError::InvalidInput(msg) => SolverError::invalid(format!("line {}: {msg}", index + 1)),
            other => other,
        })?;
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Load a word list from a file
///
/// # Errors
/// Fails if the file cannot be read or any entry is invalid; the error names
/// the file.
///
/// # Examples
/// ```no_run
/// use wordle_coach::wordlists::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> anyhow::Result<Vec<Word>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let words = words_from_lines(&content, length)
        .with_context(|| format!("invalid word list {}", path.display()))?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// The embedded word list as `Word`s
///
/// # Errors
/// Returns `SolverError::InvalidInput` if `length` is not 5, the length of
/// every built-in word.
pub fn builtin_words(length: usize) -> Result<Vec<Word>> {
    let words = BUILTIN_WORDS
        .iter()
        .map(|&entry| Word::with_length(entry, length))
        .collect::<Result<Vec<_>>>()?;
    log::info!("using {} built-in words", words.len());
    Ok(words)
}
