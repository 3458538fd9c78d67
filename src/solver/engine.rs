//! Main Wordle solver interface

use super::entropy::{GuessScore, calculate_metrics, narrow_pool, rank_guesses, select_best_guess};
use super::filter::CandidateSet;
use crate::config::SolverConfig;
use crate::core::{Observation, Pattern, Word};
use crate::error::{Result, SolverError};
use std::time::Instant;

/// How a solve loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The last guess was the answer
    Solved,
    /// Every allowed guess was used without finding the answer
    ExhaustedAttempts,
    /// The time budget ran out between rounds
    BudgetExceeded,
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq)]
pub struct SolveStep {
    pub observation: Observation,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected information of the guess in bits
    pub bits: f64,
    /// Expected candidates left after the guess
    pub expected_remaining: f64,
}

/// Result of solving a word
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub answer: Word,
    pub steps: Vec<SolveStep>,
    pub outcome: SolveOutcome,
}

impl SolveReport {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved)
    }

    /// Observations in play order
    #[must_use]
    pub fn observations(&self) -> Vec<Observation> {
        self.steps.iter().map(|s| s.observation.clone()).collect()
    }

    /// Guessed words in play order
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.steps.iter().map(|s| s.observation.guess.clone()).collect()
    }

    /// Treat an unsolved report as an error
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedAttempts` unless the answer was found.
    pub fn into_result(self) -> Result<Self> {
        if self.is_solved() {
            Ok(self)
        } else {
            Err(SolverError::ExhaustedAttempts {
                attempts: self.steps.len(),
            })
        }
    }
}

/// Main Wordle solver
///
/// Borrows the host's word lists read-only; every solve works on its own
/// copy of the candidate set.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    guess_pool: &'a [Word],
    answer_words: &'a [Word],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver with the given word lists
    ///
    /// # Parameters
    /// - `guess_pool`: All valid guessable words
    /// - `answer_words`: Words that can be answers
    /// - `config`: Mode and limits
    #[must_use]
    pub const fn new(guess_pool: &'a [Word], answer_words: &'a [Word], config: SolverConfig) -> Self {
        Self {
            guess_pool,
            answer_words,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn guess_pool(&self) -> &'a [Word] {
        self.guess_pool
    }

    #[must_use]
    pub const fn answer_words(&self) -> &'a [Word] {
        self.answer_words
    }

    /// Fresh candidate set holding every answer word
    #[must_use]
    pub fn initial_candidates(&self) -> CandidateSet {
        CandidateSet::from_slice(self.answer_words)
    }

    /// Check a word against the configured length
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` on a length mismatch.
    pub fn check_length(&self, word: &Word) -> Result<()> {
        if word.len() == self.config.word_length {
            Ok(())
        } else {
            Err(SolverError::invalid(format!(
                "'{word}' has {} letters, expected {}",
                word.len(),
                self.config.word_length
            )))
        }
    }

    /// Check every candidate against the configured length
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` naming the first mismatched word.
    pub fn check_candidates(&self, candidates: &CandidateSet) -> Result<()> {
        candidates.iter().try_for_each(|word| self.check_length(word))
    }

    /// Words evaluated as guesses this round
    fn round_pool<'c>(&self, candidates: &'c CandidateSet) -> Vec<&'c Word>
    where
        'a: 'c,
    {
        let pool = effective_pool(
            candidates,
            self.guess_pool,
            self.config.word_length,
            self.config.hard_mode,
        );
        match self.config.pool_limit {
            Some(limit) if !self.config.hard_mode => {
                narrow_pool(&pool, candidates.as_slice(), limit)
            }
            _ => pool,
        }
    }

    /// Best guess for the current candidates under this solver's mode and limits
    ///
    /// # Errors
    /// - `SolverError::NoCandidates` if `candidates` or the guess pool is empty
    /// - `SolverError::InvalidInput` if a candidate has the wrong length
    pub fn best_guess(&self, candidates: &CandidateSet) -> Result<GuessScore> {
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        self.check_candidates(candidates)?;
        if let Some(only) = guessable_single(candidates, self.guess_pool, self.config.hard_mode) {
            return Ok(GuessScore::new(only.clone(), 0.0));
        }

        let pool = self.round_pool(candidates);
        select_best_guess(&pool, candidates.as_slice()).ok_or(SolverError::NoCandidates)
    }

    /// The `k` best guesses for the current candidates, best first
    ///
    /// # Errors
    /// - `SolverError::NoCandidates` if `candidates` is empty
    /// - `SolverError::InvalidInput` if a candidate has the wrong length
    pub fn ranked_guesses(&self, candidates: &CandidateSet, k: usize) -> Result<Vec<GuessScore>> {
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        self.check_candidates(candidates)?;
        let pool = self.round_pool(candidates);
        Ok(rank_guesses(&pool, candidates.as_slice(), k))
    }

    /// Solve for a specific answer starting from every answer word
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if the answer or an answer word has the
    ///   wrong length
    /// - `SolverError::Inconsistent` if the candidates run out, which means
    ///   the answer is not among the answer words
    ///
    /// Running out of guesses is not an error; see [`SolveOutcome`].
    pub fn solve(&self, answer: &Word) -> Result<SolveReport> {
        self.solve_from(answer, self.initial_candidates())
    }

    /// Solve for `answer` starting from an explicit candidate set
    ///
    /// # Errors
    /// Same as [`Solver::solve`].
    pub fn solve_from(&self, answer: &Word, mut candidates: CandidateSet) -> Result<SolveReport> {
        self.check_length(answer)?;
        self.check_candidates(&candidates)?;

        let started = Instant::now();
        let mut steps: Vec<SolveStep> = Vec::new();

        for turn in 1..=self.config.max_guesses {
            if let Some(budget) = self.config.time_budget
                && turn > 1
                && started.elapsed() >= budget
            {
                log::warn!("solve for {answer} stopped after {} rounds: time budget spent", steps.len());
                return Ok(SolveReport {
                    answer: answer.clone(),
                    steps,
                    outcome: SolveOutcome::BudgetExceeded,
                });
            }

            let candidates_before = candidates.len();
            let choice = self.best_guess(&candidates)?;
            let metrics = calculate_metrics(&choice.word, candidates.as_slice());

            let pattern = Pattern::calculate(&choice.word, answer)?;
            candidates.retain_matching(&choice.word, pattern);

            log::debug!(
                "turn {turn}: {} {pattern} ({:.3} bits), {candidates_before} -> {} candidates",
                choice.word,
                choice.bits,
                candidates.len()
            );

            steps.push(SolveStep {
                observation: Observation {
                    guess: choice.word,
                    pattern,
                },
                candidates_before,
                candidates_after: candidates.len(),
                bits: choice.bits,
                expected_remaining: metrics.expected_remaining,
            });

            if pattern.is_solved() {
                return Ok(SolveReport {
                    answer: answer.clone(),
                    steps,
                    outcome: SolveOutcome::Solved,
                });
            }

            if candidates.is_empty() {
                return Err(SolverError::Inconsistent {
                    remaining: candidates_before,
                });
            }
        }

        Ok(SolveReport {
            answer: answer.clone(),
            steps,
            outcome: SolveOutcome::ExhaustedAttempts,
        })
    }
}

/// Pool words of `length` letters, or the candidates themselves in hard mode
fn effective_pool<'c>(
    candidates: &'c CandidateSet,
    pool: &'c [Word],
    length: usize,
    hard_mode: bool,
) -> Vec<&'c Word> {
    if hard_mode {
        return candidates.iter().collect();
    }
    pool.iter().filter(|word| word.len() == length).collect()
}

/// The length every candidate shares
fn shared_length(candidates: &CandidateSet) -> Result<usize> {
    let mut words = candidates.iter();
    let length = words.next().map_or(0, Word::len);
    match words.find(|word| word.len() != length) {
        Some(odd) => Err(SolverError::invalid(format!(
            "candidate '{odd}' has {} letters, expected {length}",
            odd.len()
        ))),
        None => Ok(length),
    }
}

/// The last candidate, when it is also allowed as a guess
fn guessable_single<'c>(candidates: &'c CandidateSet, pool: &[Word], hard_mode: bool) -> Option<&'c Word> {
    candidates
        .single()
        .filter(|&only| hard_mode || pool.contains(only))
}

/// Entropy-maximizing guess for `candidates`
///
/// Guesses come from `pool`, or from `candidates` when `hard_mode` is set.
/// A single remaining candidate is returned directly with 0 bits.
///
/// # Errors
/// - `SolverError::NoCandidates` if `candidates` or the guess pool is empty
/// - `SolverError::InvalidInput` if the candidates differ in length
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::{CandidateSet, best_guess};
///
/// let pool: Vec<Word> = ["crane", "slate", "irate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates = CandidateSet::from_slice(&pool[1..]);
///
/// let choice = best_guess(&candidates, &pool, true).unwrap();
/// assert!(candidates.contains(&choice.word));
/// ```
pub fn best_guess(candidates: &CandidateSet, pool: &[Word], hard_mode: bool) -> Result<GuessScore> {
    if candidates.is_empty() {
        return Err(SolverError::NoCandidates);
    }
    let length = shared_length(candidates)?;
    if let Some(only) = guessable_single(candidates, pool, hard_mode) {
        return Ok(GuessScore::new(only.clone(), 0.0));
    }

    let guesses = effective_pool(candidates, pool, length, hard_mode);
    select_best_guess(&guesses, candidates.as_slice()).ok_or(SolverError::NoCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn setup_solver() -> (Vec<Word>, Vec<Word>) {
        let all_words = words(&["crane", "slate", "irate", "crate", "grate", "spilt"]);
        let answer_words = words(&["irate", "crate", "grate"]);
        (all_words, answer_words)
    }

    #[test]
    fn best_guess_returns_pool_word() {
        let (all_words, answer_words) = setup_solver();
        let solver = Solver::new(&all_words, &answer_words, SolverConfig::default());

        let choice = solver.best_guess(&solver.initial_candidates()).unwrap();
        assert!(all_words.contains(&choice.word));
        assert!(choice.bits > 0.0);
    }

    #[test]
    fn best_guess_hard_mode_stays_in_candidates() {
        let (all_words, answer_words) = setup_solver();
        let config = SolverConfig::default().with_hard_mode(true);
        let solver = Solver::new(&all_words, &answer_words, config);

        let candidates = solver.initial_candidates();
        let choice = solver.best_guess(&candidates).unwrap();
        assert!(candidates.contains(&choice.word));
    }

    #[test]
    fn best_guess_single_candidate_short_circuits() {
        let (all_words, _) = setup_solver();
        let candidates = CandidateSet::from_slice(&words(&["grate"]));

        let choice = best_guess(&candidates, &all_words, false).unwrap();
        assert_eq!(choice.word.text(), "GRATE");
        assert!(choice.bits.abs() < f64::EPSILON);
    }

    #[test]
    fn best_guess_empty_candidates_is_error() {
        let (all_words, _) = setup_solver();
        assert_eq!(
            best_guess(&CandidateSet::default(), &all_words, false),
            Err(SolverError::NoCandidates)
        );
    }

    #[test]
    fn solve_finds_answer() {
        let (all_words, answer_words) = setup_solver();
        let solver = Solver::new(&all_words, &answer_words, SolverConfig::default());

        let report = solver.solve(&Word::new("grate").unwrap()).unwrap();

        assert!(report.is_solved());
        assert_eq!(report.guesses().last().unwrap().text(), "GRATE");
        assert!(report.steps.len() <= 6);
        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_respects_max_guesses() {
        let all_words = words(&["aaaaa"]);
        let answer_words = words(&["bbbbb", "ccccc", "ddddd"]);
        let config = SolverConfig::default().with_max_guesses(3);
        let solver = Solver::new(&all_words, &answer_words, config);

        // AAAAA never distinguishes anything and the answers are not guessable
        let report = solver.solve(&Word::new("ccccc").unwrap()).unwrap();

        assert_eq!(report.outcome, SolveOutcome::ExhaustedAttempts);
        assert_eq!(report.steps.len(), 3);
        assert_eq!(
            report.into_result(),
            Err(SolverError::ExhaustedAttempts { attempts: 3 })
        );
    }

    #[test]
    fn solve_answer_outside_candidates_is_inconsistent() {
        let (all_words, answer_words) = setup_solver();
        let solver = Solver::new(&all_words, &answer_words, SolverConfig::default());

        let result = solver.solve(&Word::new("slate").unwrap());
        // Reports the candidates left before the guess that ruled them all out
        assert!(matches!(
            result,
            Err(SolverError::Inconsistent { remaining }) if (1..=3).contains(&remaining)
        ));
    }

    #[test]
    fn mixed_length_candidates_are_rejected() {
        let (all_words, _) = setup_solver();
        let mixed = CandidateSet::from_slice(&words(&["crane", "slates", "irate"]));

        for hard_mode in [false, true] {
            let result = best_guess(&mixed, &all_words, hard_mode);
            assert!(matches!(result, Err(SolverError::InvalidInput(_))), "hard mode {hard_mode}");
        }
    }

    #[test]
    fn solver_rejects_mixed_length_answer_words() {
        let (all_words, _) = setup_solver();
        let answer_words = words(&["crane", "irate", "grates"]);

        for config in [SolverConfig::default(), SolverConfig::default().with_hard_mode(true)] {
            let solver = Solver::new(&all_words, &answer_words, config);
            let candidates = solver.initial_candidates();

            assert!(matches!(solver.best_guess(&candidates), Err(SolverError::InvalidInput(_))));
            assert!(matches!(
                solver.ranked_guesses(&candidates, 3),
                Err(SolverError::InvalidInput(_))
            ));
            assert!(matches!(
                solver.solve(&Word::new("irate").unwrap()),
                Err(SolverError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn pool_limit_restricts_scored_guesses() {
        let all_words = words(&["zzzzz", "slate", "qajaq", "crane", "irate", "fuzzy"]);
        let answer_words = words(&["irate", "grate"]);
        let config = SolverConfig::default().with_pool_limit(Some(2));
        let solver = Solver::new(&all_words, &answer_words, config);

        let ranked = solver.ranked_guesses(&solver.initial_candidates(), 10).unwrap();
        let mut texts: Vec<&str> = ranked.iter().map(|score| score.word.text()).collect();
        texts.sort_unstable();

        // IRATE is a candidate; SLATE and CRANE cover the most candidate letters
        assert_eq!(texts, ["CRANE", "IRATE", "SLATE"]);
    }

    #[test]
    fn pool_limit_is_ignored_in_hard_mode() {
        let all_words = words(&["zzzzz", "slate", "crane", "irate"]);
        let answer_words = words(&["irate", "grate"]);

        let limited = SolverConfig::default().with_pool_limit(Some(0));
        let solver = Solver::new(&all_words, &answer_words, limited.clone());
        let ranked = solver.ranked_guesses(&solver.initial_candidates(), 10).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word.text(), "IRATE");

        let solver = Solver::new(&all_words, &answer_words, limited.with_hard_mode(true));
        let ranked = solver.ranked_guesses(&solver.initial_candidates(), 10).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn pool_limited_solve_finds_answer() {
        let all_words = crate::wordlists::builtin_words(5).unwrap();
        let config = SolverConfig::default()
            .with_pool_limit(Some(20))
            .with_max_guesses(12);
        let solver = Solver::new(&all_words, &all_words, config);

        for answer in ["house", "pride", "ghost"] {
            let report = solver.solve(&Word::new(answer).unwrap()).unwrap();
            assert!(report.is_solved(), "{answer}: {:?}", report.outcome);
            assert_eq!(report.guesses().last().unwrap().text(), answer.to_uppercase());
        }
    }

    #[test]
    fn hard_mode_solve_only_guesses_candidates() {
        let all_words = crate::wordlists::builtin_words(5).unwrap();
        let config = SolverConfig::default().with_hard_mode(true).with_max_guesses(12);
        let solver = Solver::new(&all_words, &all_words, config);

        for answer in ["house", "crane", "lemon"] {
            let report = solver.solve(&Word::new(answer).unwrap()).unwrap();
            assert!(report.is_solved(), "{answer}: {:?}", report.outcome);

            let mut candidates = solver.initial_candidates();
            for step in &report.steps {
                let obs = &step.observation;
                assert!(candidates.contains(&obs.guess), "{answer}: {} was not a candidate", obs.guess);
                candidates.retain_observed(obs);
            }
        }
    }

    #[test]
    fn solve_rejects_wrong_length_answer() {
        let (all_words, answer_words) = setup_solver();
        let solver = Solver::new(&all_words, &answer_words, SolverConfig::default());

        let result = solver.solve(&Word::new("grates").unwrap());
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn zero_budget_stops_after_first_round() {
        let all_words = words(&["aaaaa"]);
        let answer_words = words(&["bbbbb", "ccccc"]);
        let config = SolverConfig::default().with_time_budget(Some(Duration::ZERO));
        let solver = Solver::new(&all_words, &answer_words, config);

        let report = solver.solve(&Word::new("ccccc").unwrap()).unwrap();

        assert_eq!(report.outcome, SolveOutcome::BudgetExceeded);
        assert_eq!(report.steps.len(), 1);
    }

    #[test]
    fn ranked_guesses_led_by_best_guess() {
        let (all_words, answer_words) = setup_solver();
        let solver = Solver::new(&all_words, &answer_words, SolverConfig::default());
        let candidates = solver.initial_candidates();

        let ranked = solver.ranked_guesses(&candidates, 3).unwrap();
        let best = solver.best_guess(&candidates).unwrap();
        assert_eq!(ranked[0], best);
    }
}
