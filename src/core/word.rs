//! Wordle word representation
//!
//! A Word stores an uppercase ASCII word of any length up to [`MAX_WORD_LEN`].

use crate::error::{Result, SolverError};
use std::fmt;

/// Longest word a [`Word`] can hold
///
/// Bounded by the packed base-3 encoding used by [`super::Pattern`].
pub const MAX_WORD_LEN: usize = 40;

/// Number of distinct letters a word may contain (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// An uppercase Wordle word
///
/// Ordering is lexicographic on the text and is what breaks ties between
/// equally informative guesses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the text is empty, longer than
    /// [`MAX_WORD_LEN`], or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let raw = text.as_ref();

        if raw.is_empty() {
            return Err(SolverError::invalid("word must not be empty"));
        }

        if raw.len() > MAX_WORD_LEN {
            return Err(SolverError::invalid(format!(
                "word '{raw}' is longer than {MAX_WORD_LEN} letters"
            )));
        }

        if !raw.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(SolverError::invalid(format!(
                "word '{raw}' must contain only ASCII letters"
            )));
        }

        Ok(Self {
            text: raw.to_ascii_uppercase(),
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` for any reason [`Word::new`] does,
    /// or when the length differs.
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(SolverError::invalid(format!(
                "word '{word}' has {} letters, expected {length}",
                word.len()
            )));
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word, indexed A=0..Z=25
    ///
    /// Used for pattern calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in self.chars() {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of an uppercase ASCII letter in a letter tally
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
