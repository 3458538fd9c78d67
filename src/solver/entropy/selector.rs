//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).
//!
//! Ties are broken the same way everywhere: higher entropy first, then a
//! guess that could itself be the answer, then the alphabetically first
//! word. The parallel reduction uses that same total order, so the result
//! never depends on how rayon splits the pool.

use super::calculator::calculate_entropy;
use crate::core::{ALPHABET_SIZE, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::{Ordering, Reverse};
use std::fmt;

/// A guess and the information it is expected to yield
#[derive(Debug, Clone, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    /// Expected information in bits
    pub bits: f64,
}

impl GuessScore {
    #[must_use]
    pub const fn new(word: Word, bits: f64) -> Self {
        Self { word, bits }
    }
}

impl fmt::Display for GuessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} bits)", self.word, self.bits)
    }
}

struct Scored<'a> {
    word: &'a Word,
    bits: f64,
    is_candidate: bool,
}

impl Scored<'_> {
    /// `Greater` means `self` is the better guess
    fn preference(&self, other: &Self) -> Ordering {
        self.bits
            .total_cmp(&other.bits)
            .then(self.is_candidate.cmp(&other.is_candidate))
            .then_with(|| other.word.cmp(self.word))
    }

    fn into_score(self) -> GuessScore {
        GuessScore::new(self.word.clone(), self.bits)
    }
}

fn score_pool<'a>(guess_pool: &[&'a Word], candidates: &[Word]) -> Vec<Scored<'a>> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .map(|&guess| Scored {
            word: guess,
            bits: calculate_entropy(guess, candidates),
            is_candidate: candidate_set.contains(guess),
        })
        .collect()
}

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
///
/// let best = select_best_guess(&guess_refs, &candidates).unwrap();
/// assert_eq!(best.word.text(), "AEROS"); // AEROS has higher entropy than AAAAA
/// assert!(best.bits > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[&Word], candidates: &[Word]) -> Option<GuessScore> {
    score_pool(guess_pool, candidates)
        .into_par_iter()
        .max_by(Scored::preference)
        .map(Scored::into_score)
}

/// The `k` best guesses, best first, under the same ordering as
/// [`select_best_guess`]
#[must_use]
pub fn rank_guesses(guess_pool: &[&Word], candidates: &[Word], k: usize) -> Vec<GuessScore> {
    let mut scored = score_pool(guess_pool, candidates);
    scored.sort_by(|a, b| b.preference(a));
    scored.truncate(k);
    scored.into_iter().map(Scored::into_score).collect()
}

/// Shrink a large guess pool before scoring
///
/// Keeps every pool word that is still a candidate, plus the `limit` other
/// pool words covering the most candidate letters: each distinct letter of
/// a word scores the number of candidates containing that letter. Pool
/// order is preserved.
#[must_use]
pub fn narrow_pool<'a>(guess_pool: &[&'a Word], candidates: &[Word], limit: usize) -> Vec<&'a Word> {
    if guess_pool.len() <= limit {
        return guess_pool.to_vec();
    }

    let mut letter_freq = [0usize; ALPHABET_SIZE];
    for candidate in candidates {
        for index in distinct_letters(candidate) {
            letter_freq[index] += 1;
        }
    }
    let coverage = |word: &Word| -> usize {
        distinct_letters(word).map(|index| letter_freq[index]).sum()
    };

    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();
    let mut others: Vec<&Word> = guess_pool
        .iter()
        .copied()
        .filter(|word| !candidate_set.contains(word))
        .collect();
    others.sort_by_cached_key(|&word| (Reverse(coverage(word)), word));
    others.truncate(limit);

    let chosen: FxHashSet<&Word> = others.into_iter().collect();
    let narrowed: Vec<&Word> = guess_pool
        .iter()
        .copied()
        .filter(|word| candidate_set.contains(word) || chosen.contains(word))
        .collect();

    log::trace!(
        "narrowed guess pool from {} to {} words",
        guess_pool.len(),
        narrowed.len()
    );
    narrowed
}

fn distinct_letters(word: &Word) -> impl Iterator<Item = usize> + '_ {
    let mut seen = [false; ALPHABET_SIZE];
    word.chars().iter().filter_map(move |&ch| {
        let index = usize::from(ch - b'A');
        (!std::mem::replace(&mut seen[index], true)).then_some(index)
    })
}
