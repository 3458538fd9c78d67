//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct patterns the guess can produce
    pub partitions: usize,
}

impl GuessMetrics {
    const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
        partitions: 0,
    };
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits. Candidates whose length
/// differs from the guess are ignored.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    let mut sizes = partition_sizes(guess, candidates);
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }
    entropy_of_sorted(sort_sizes(&mut sizes), total)
}

/// Expected number of candidates left after `guess`
///
/// Σ p_k · n_k over the pattern buckets: the size of the bucket the answer
/// lands in, averaged over all candidates.
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    calculate_metrics(guess, candidates).expected_remaining
}

/// Group candidates by the pattern they produce with the guess
///
/// Candidates of a different length than the guess cannot produce any
/// pattern and are left out.
pub(crate) fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates.iter().filter(|c| c.len() == guess.len()) {
        let pattern = Pattern::compute(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

fn partition_sizes(guess: &Word, candidates: &[Word]) -> Vec<usize> {
    group_by_pattern(guess, candidates).into_values().collect()
}

fn sort_sizes(sizes: &mut [usize]) -> &[usize] {
    sizes.sort_unstable();
    sizes
}

/// Entropy of bucket sizes, summed smallest bucket first
///
/// Summing in a fixed order makes two guesses with the same bucket sizes
/// score bit-for-bit equal, which the tie-break relies on.
fn entropy_of_sorted(sizes: &[usize], total: usize) -> f64 {
    let total = total as f64;
    sizes
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_coach::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_coach::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert("GG".parse::<Pattern>().unwrap(), 25);
/// uniform.insert("G_".parse::<Pattern>().unwrap(), 25);
/// uniform.insert("_G".parse::<Pattern>().unwrap(), 25);
/// uniform.insert("__".parse::<Pattern>().unwrap(), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>();

    if total == 0 {
        return 0.0;
    }

    let mut sizes: Vec<usize> = pattern_counts.values().copied().collect();
    entropy_of_sorted(sort_sizes(&mut sizes), total)
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size
/// from a single bucketing pass.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    let mut sizes = partition_sizes(guess, candidates);
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return GuessMetrics::EMPTY;
    }
    let sizes = sort_sizes(&mut sizes);

    let expected_remaining: f64 = sizes
        .iter()
        .map(|&count| {
            let p = count as f64 / total as f64;
            p * count as f64
        })
        .sum();

    GuessMetrics {
        entropy: entropy_of_sorted(sizes, total),
        expected_remaining,
        max_partition: sizes.last().copied().unwrap_or(0),
        partitions: sizes.len(),
    }
}
