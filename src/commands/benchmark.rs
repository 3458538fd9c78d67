//! Benchmark command
//!
//! Solves many answers in parallel and collects the guess distribution.

use crate::core::Word;
use crate::solver::{SolveOutcome, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Exhausted guesses, ran out of time, or hit an error
    pub failed: Vec<Word>,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count of each solved game
    pub distribution: FxHashMap<usize, usize>,
    /// Opening guess and how often it was played
    pub first_guesses: FxHashMap<Word, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of games solved, in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64 * 100.0
    }
}

/// One finished game: guesses used and opening guess, or `None` if unsolved
type GameResult = (Word, Option<(usize, Word)>);

/// Solve every word in `targets`
///
/// Games run in parallel; progress is drawn unless `show_progress` is false.
pub fn run_benchmark(solver: &Solver<'_>, targets: &[Word], show_progress: bool) -> BenchmarkResult {
    let progress = if show_progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };
    let start = Instant::now();

    let games: Vec<GameResult> = targets
        .par_iter()
        .map(|target| {
            let outcome = match solver.solve(target) {
                Ok(report) if report.outcome == SolveOutcome::Solved => {
                    let opening = report.steps.first().map(|step| step.observation.guess.clone());
                    opening.map(|first| (report.steps.len(), first))
                }
                Ok(report) => {
                    log::debug!("{target}: {:?}", report.outcome);
                    None
                }
                Err(err) => {
                    log::warn!("{target}: {err}");
                    None
                }
            };
            progress.inc(1);
            (target.clone(), outcome)
        })
        .collect();

    progress.finish_and_clear();
    let duration = start.elapsed();

    let mut result = BenchmarkResult {
        total_words: targets.len(),
        solved: 0,
        failed: Vec::new(),
        total_guesses: 0,
        average_guesses: 0.0,
        min_guesses: 0,
        max_guesses: 0,
        distribution: FxHashMap::default(),
        first_guesses: FxHashMap::default(),
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    let mut min_guesses = usize::MAX;
    for (target, outcome) in games {
        let Some((guesses, first)) = outcome else {
            result.failed.push(target);
            continue;
        };
        result.solved += 1;
        result.total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        result.max_guesses = result.max_guesses.max(guesses);
        *result.distribution.entry(guesses).or_insert(0) += 1;
        *result.first_guesses.entry(first).or_insert(0) += 1;
    }

    if result.solved > 0 {
        result.min_guesses = min_guesses;
        result.average_guesses = result.total_guesses as f64 / result.solved as f64;
    }

    log::info!(
        "benchmark: {}/{} solved in {:.2}s",
        result.solved,
        result.total_words,
        duration.as_secs_f64()
    );
    result
}

fn progress_bar(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }
    progress
}
