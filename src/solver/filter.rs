//! Candidate filtering
//!
//! Narrows a candidate set to the words consistent with observed feedback.

use crate::core::{Observation, Pattern, Word};
use rustc_hash::FxHashSet;

/// Words still possible as the answer
///
/// Keeps the order of the list it was built from and never holds a word
/// twice. Filtering only ever removes words, so two sets filtered from the
/// same source by the same observations compare equal whatever order the
/// observations were applied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build a set, dropping repeated words after their first occurrence
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    /// Copy a borrowed word list into a fresh set
    #[must_use]
    pub fn from_slice(words: &[Word]) -> Self {
        Self::new(words.iter().cloned())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The only remaining word, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Drop every word that would not have produced `pattern` for `guess`
    ///
    /// Words of a different length than the guess are always dropped.
    pub fn retain_matching(&mut self, guess: &Word, pattern: Pattern) {
        self.words.retain(|candidate| {
            candidate.len() == guess.len() && Pattern::compute(guess, candidate) == pattern
        });
    }

    /// Drop every word that contradicts the observation
    pub fn retain_observed(&mut self, observation: &Observation) {
        self.words.retain(|candidate| observation.admits(candidate));
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Filter candidates by a single (guess, pattern) observation
#[must_use]
pub fn filter_one(candidates: &CandidateSet, guess: &Word, pattern: Pattern) -> CandidateSet {
    let mut filtered = candidates.clone();
    filtered.retain_matching(guess, pattern);
    filtered
}

/// Filter candidates to those consistent with every observation
///
/// An empty result is not an error here: it means the observations
/// contradict each other or the answer is outside the candidate list.
///
/// # Examples
/// ```
/// use wordle_coach::core::{Observation, Word};
/// use wordle_coach::solver::{CandidateSet, filter_candidates};
///
/// let candidates: CandidateSet = ["house", "mouse", "rouse"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let observation: Observation = "mouse=_GGGG".parse().unwrap();
///
/// let remaining = filter_candidates(&candidates, &[observation]);
/// // ROUSE differs from MOUSE in the same position
/// let expected = [Word::new("house").unwrap(), Word::new("rouse").unwrap()];
/// assert_eq!(remaining.as_slice(), &expected);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &CandidateSet, observations: &[Observation]) -> CandidateSet {
    let words = candidates
        .iter()
        .filter(|&candidate| observations.iter().all(|obs| obs.admits(candidate)))
        .cloned()
        .collect();
    CandidateSet { words }
}
