//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, gray)
//! - 1 = Present (letter in word, wrong position, yellow)
//! - 2 = Correct (letter in correct position, green)
//!
//! The marks are packed into a single `u64`, where each position contributes
//! digit × 3^position, alongside the word length. Words of up to 40 letters fit.

use super::word::{ALPHABET_SIZE, MAX_WORD_LEN, letter_index};
use super::Word;
use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter does not occur in the answer (beyond those already claimed)
    Absent = 0,
    /// Letter occurs in the answer at a different position
    Present = 1,
    /// Letter is in the right position
    Correct = 2,
}

impl Mark {
    const fn from_digit(digit: u64) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one entered feedback character
    ///
    /// Accepts G/g/2/🟩 for Correct, Y/y/1/🟨 for Present and
    /// _/-/./B/b/0/⬜/⬛ for Absent.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            '_' | '-' | '.' | 'B' | 'b' | '0' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical wire character: `G`, `Y` or `_`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '_',
        }
    }

    /// Colored square for terminal display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u64,
    len: u8,
}

impl Pattern {
    /// All-Correct pattern for a word of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` is 0 or exceeds [`MAX_WORD_LEN`]
    #[must_use]
    pub const fn all_correct(len: usize) -> Self {
        debug_assert!(len > 0 && len <= MAX_WORD_LEN);
        // Σ 2·3^i for i < len
        Self {
            code: 3u64.pow(len as u32) - 1,
            len: len as u8,
        }
    }

    /// Build a pattern from explicit marks
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `marks` is empty or longer than
    /// [`MAX_WORD_LEN`].
    pub fn from_marks(marks: &[Mark]) -> Result<Self> {
        if marks.is_empty() || marks.len() > MAX_WORD_LEN {
            return Err(SolverError::invalid(format!(
                "pattern must have 1 to {MAX_WORD_LEN} marks, got {}",
                marks.len()
            )));
        }
        Ok(Self::encode(marks))
    }

    fn encode(marks: &[Mark]) -> Self {
        let mut code = 0u64;
        let mut multiplier = 1u64;
        for &mark in marks {
            code += mark as u64 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// Get the raw packed value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.code
    }

    /// Number of marks (the word length)
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false; patterns have at least one mark
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if this is a perfect match (all Correct)
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.code == Self::all_correct(self.len as usize).code
    }

    /// Mark at `position`
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[must_use]
    pub fn mark_at(self, position: usize) -> Mark {
        assert!(position < self.len(), "position {position} out of range");
        Mark::from_digit(self.code / 3u64.pow(position as u32) % 3)
    }

    /// Iterate the marks left to right
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut val = self.code;
        (0..self.len()).map(move |_| {
            let mark = Mark::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements Wordle's exact duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct; every other answer letter
    ///    goes into a per-letter tally
    /// 2. Second pass, left to right over the non-Correct positions: mark
    ///    Present while the tally for that letter is above zero, decrementing
    ///    it, otherwise Absent
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer).unwrap();
    ///
    /// assert_eq!(pattern.to_string(), "__G_G");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self> {
        if guess.len() != answer.len() {
            return Err(SolverError::invalid(format!(
                "guess '{guess}' and answer '{answer}' differ in length"
            )));
        }
        Ok(Self::compute(guess, answer))
    }

    /// Pattern calculation for words already known to share a length
    pub(crate) fn compute(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len());

        let guess = guess.chars();
        let answer = answer.chars();
        let mut marks = [Mark::Absent; MAX_WORD_LEN];
        let mut available = [0u8; ALPHABET_SIZE];

        // First pass: greens, and tally the unmatched answer letters
        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                marks[i] = Mark::Correct;
            } else {
                available[letter_index(a)] += 1;
            }
        }

        // Second pass: yellows from what is left
        for (i, &g) in guess.iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            let slot = &mut available[letter_index(g)];
            if *slot > 0 {
                marks[i] = Mark::Present;
                *slot -= 1;
            }
        }

        Self::encode(&marks[..guess.len()])
    }

    /// Count the Correct marks
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.marks().filter(|&m| m == Mark::Correct).count()
    }

    /// Count the Present marks
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::Pattern;
    ///
    /// let p: Pattern = "GY_GY".parse().unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().map(Mark::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks().try_for_each(|mark| write!(f, "{}", mark.symbol()))
    }
}

impl std::str::FromStr for Pattern {
    type Err = SolverError;

    /// Parse a pattern like `"GY_GY"` or `"🟩🟨⬜🟩🟨"`
    fn from_str(s: &str) -> Result<Self> {
        let marks = s
            .trim()
            .chars()
            .map(|ch| {
                Mark::from_char(ch).ok_or_else(|| {
                    SolverError::invalid(format!("invalid pattern character '{ch}' in '{s}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_marks(&marks)
    }
}
