//! Game replay and rating
//!
//! Replays a finished game against its answer and rates each guess against
//! the entropy-maximizing choice for the same candidate set.

use super::rating::{game_luck, skill_rating, step_luck};
use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::error::{Result, SolverError};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{GuessScore, SolveReport, Solver};

/// Analysis for a single guess
#[derive(Debug, Clone, PartialEq)]
pub struct StepAnalysis {
    /// 1-based guess number
    pub turn: usize,
    pub guess: Word,
    pub pattern: Pattern,
    pub remaining_before: usize,
    pub remaining_after: usize,
    /// Information actually gained: log2(before / after)
    pub actual_bits: f64,
    /// Information the guess was expected to give
    pub guess_bits: f64,
    /// Candidates the guess was expected to leave
    pub expected_remaining: f64,
    /// What the solver would have played
    pub optimal: GuessScore,
    pub skill: u8,
    /// `None` when the answer was already certain
    pub luck: Option<u8>,
    /// Stronger guesses, listed only for weak plays
    pub alternatives: Vec<GuessScore>,
}

impl StepAnalysis {
    /// Whether the player's guess differs from the solver's while there was
    /// still something to learn
    #[must_use]
    pub fn is_suboptimal(&self) -> bool {
        self.remaining_before > 1 && self.guess != self.optimal.word
    }
}

/// Analysis of a complete game
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub answer: Word,
    pub steps: Vec<StepAnalysis>,
    pub solved: bool,
    pub average_skill: f64,
    /// Game luck on the 0-99 scale
    pub luck: u8,
}

impl AnalysisReport {
    pub fn suboptimal_steps(&self) -> impl Iterator<Item = &StepAnalysis> {
        self.steps.iter().filter(|step| step.is_suboptimal())
    }

    /// The suboptimal guess with the lowest skill
    #[must_use]
    pub fn weakest_step(&self) -> Option<&StepAnalysis> {
        self.suboptimal_steps().min_by_key(|step| step.skill)
    }

    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.steps.len()
    }
}

/// A player's game next to the solver's own game for the same answer
#[derive(Debug, Clone, PartialEq)]
pub struct GameComparison {
    pub player: AnalysisReport,
    pub optimal: SolveReport,
}

impl GameComparison {
    /// Player guesses minus solver guesses; negative means the player beat it
    #[must_use]
    pub fn guess_difference(&self) -> isize {
        self.player.steps.len() as isize - self.optimal.steps.len() as isize
    }
}

/// Rates played games against the solver
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    solver: Solver<'a>,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub const fn new(guess_pool: &'a [Word], answer_words: &'a [Word], config: SolverConfig) -> Self {
        Self {
            solver: Solver::new(guess_pool, answer_words, config),
        }
    }

    #[must_use]
    pub fn from_solver(solver: &Solver<'a>) -> Self {
        Self {
            solver: solver.clone(),
        }
    }

    #[must_use]
    pub const fn solver(&self) -> &Solver<'a> {
        &self.solver
    }

    /// Analyze a complete game
    ///
    /// Guesses after the one that found the answer are ignored.
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` for an empty game or a word of the wrong length
    /// - `SolverError::Inconsistent` if the answer is not among the candidates
    pub fn analyze(&self, answer: &Word, guesses: &[Word]) -> Result<AnalysisReport> {
        if guesses.is_empty() {
            return Err(SolverError::invalid("no guesses to analyze"));
        }
        self.solver.check_length(answer)?;
        for guess in guesses {
            self.solver.check_length(guess)?;
        }

        let config = self.solver.config();
        let mut candidates = self.solver.initial_candidates();
        let mut steps: Vec<StepAnalysis> = Vec::with_capacity(guesses.len());

        for (index, guess) in guesses.iter().enumerate() {
            if !self.solver.guess_pool().contains(guess) {
                log::warn!("{guess} is not in the guess pool; rating it anyway");
            }

            let remaining_before = candidates.len();
            let pattern = Pattern::calculate(guess, answer)?;
            let metrics = calculate_metrics(guess, candidates.as_slice());
            let is_answer = pattern.is_solved();

            // One scoring pass gives both the optimum and the alternatives
            let mut ranked = self
                .solver
                .ranked_guesses(&candidates, config.alternatives + 1)?
                .into_iter();
            let optimal = ranked.next().ok_or(SolverError::NoCandidates)?;
            let skill = skill_rating(metrics.entropy, optimal.bits, is_answer);

            let alternatives = if skill < config.quality_threshold {
                std::iter::once(optimal.clone())
                    .chain(ranked)
                    .filter(|alt| alt.word != *guess && alt.bits > metrics.entropy)
                    .take(config.alternatives)
                    .collect()
            } else {
                Vec::new()
            };

            candidates.retain_matching(guess, pattern);
            let remaining_after = candidates.len();
            if remaining_after == 0 {
                return Err(SolverError::Inconsistent {
                    remaining: remaining_before,
                });
            }

            let luck = (remaining_before > 1).then(|| step_luck(metrics.expected_remaining, remaining_after));

            log::debug!(
                "guess {}: {guess} {pattern} skill {skill}, {remaining_before} -> {remaining_after}",
                index + 1
            );

            steps.push(StepAnalysis {
                turn: index + 1,
                guess: guess.clone(),
                pattern,
                remaining_before,
                remaining_after,
                actual_bits: (remaining_before as f64 / remaining_after as f64).log2(),
                guess_bits: metrics.entropy,
                expected_remaining: metrics.expected_remaining,
                optimal,
                skill,
                luck,
                alternatives,
            });

            if is_answer {
                break;
            }
        }

        let solved = steps.last().is_some_and(|step| step.pattern.is_solved());
        let average_skill =
            steps.iter().map(|step| f64::from(step.skill)).sum::<f64>() / steps.len() as f64;
        let luck = game_luck(steps.iter().filter_map(|step| step.luck));

        Ok(AnalysisReport {
            answer: answer.clone(),
            steps,
            solved,
            average_skill,
            luck,
        })
    }

    /// Analyze a game and solve the same answer for comparison
    ///
    /// # Errors
    /// Same as [`Analyzer::analyze`] and [`Solver::solve`].
    pub fn compare_with_optimal(&self, answer: &Word, guesses: &[Word]) -> Result<GameComparison> {
        Ok(GameComparison {
            player: self.analyze(answer, guesses)?,
            optimal: self.solver.solve(answer)?,
        })
    }
}

/// Analyze a played game against `answer`
///
/// `pool` holds the legal guesses and `candidates` the possible answers.
///
/// # Errors
/// Same as [`Analyzer::analyze`].
pub fn analyze_game(
    answer: &Word,
    guesses: &[Word],
    pool: &[Word],
    candidates: &[Word],
    config: &SolverConfig,
) -> Result<AnalysisReport> {
    Analyzer::new(pool, candidates, config.clone()).analyze(answer, guesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn lists() -> Vec<Word> {
        words(&[
            "crane", "slate", "irate", "crate", "grate", "plate", "skate", "state", "spilt",
            "trace", "house", "mouse", "rouse",
        ])
    }

    #[test]
    fn solver_game_scores_full_skill() {
        let pool = lists();
        let analyzer = Analyzer::new(&pool, &pool, SolverConfig::default());
        let answer = Word::new("skate").unwrap();

        let played = analyzer.solver().solve(&answer).unwrap();
        let report = analyzer.analyze(&answer, &played.guesses()).unwrap();

        assert!(report.solved);
        assert!(report.steps.iter().all(|step| step.skill == 99));
        assert!(report.suboptimal_steps().next().is_none());
        assert!((report.average_skill - 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weak_guess_gets_alternatives() {
        let pool = lists();
        let analyzer = Analyzer::new(&pool, &pool, SolverConfig::default());
        let answer = Word::new("mouse").unwrap();

        // HOUSE first is informative only about the -OUSE family
        let guesses = words(&["house", "rouse", "mouse"]);
        let report = analyzer.analyze(&answer, &guesses).unwrap();

        let first = &report.steps[0];
        assert!(first.skill < 99);
        assert_eq!(first.alternatives.first(), Some(&first.optimal));
        assert!(first.alternatives.len() <= 3);
        assert!(first.alternatives.iter().all(|alt| alt.bits > first.guess_bits));
        assert!(first.alternatives.iter().all(|alt| alt.word != first.guess));
        assert!(report.weakest_step().is_some());
        assert!(report.solved);
    }

    #[test]
    fn wasted_guess_when_answer_known() {
        let pool = lists();
        let analyzer = Analyzer::new(&pool, &pool, SolverConfig::default());
        let answer = Word::new("house").unwrap();

        // After MOUSE=_GGGG and ROUSE=_GGGG only HOUSE is left
        let guesses = words(&["mouse", "rouse", "crane", "house"]);
        let report = analyzer.analyze(&answer, &guesses).unwrap();

        let certain = &report.steps[2];
        assert_eq!(certain.remaining_before, 1);
        assert_eq!(certain.skill, crate::analysis::WASTED_GUESS_SKILL);
        assert_eq!(certain.luck, None);
        assert_eq!(report.steps[3].skill, 99);
    }

    #[test]
    fn actual_bits_follow_candidate_counts() {
        let pool = lists();
        let analyzer = Analyzer::new(&pool, &pool, SolverConfig::default());
        let answer = Word::new("house").unwrap();

        let report = analyzer.analyze(&answer, &words(&["mouse", "house"])).unwrap();
        let first = &report.steps[0];

        let expected = (first.remaining_before as f64 / first.remaining_after as f64).log2();
        assert!((first.actual_bits - expected).abs() < 1e-12);
    }

    #[test]
    fn trailing_guesses_after_solve_are_ignored() {
        let pool = lists();
        let analyzer = Analyzer::new(&pool, &pool, SolverConfig::default());
        let answer = Word::new("crate").unwrap();

        let report = analyzer
            .analyze(&answer, &words(&["crate", "slate"]))
            .unwrap();
        assert_eq!(report.num_guesses(), 1);
        assert!(report.solved);
    }

    #[test]
    fn empty_game_is_invalid() {
        let pool = lists();
        let analyzer = Analyzer::new(&pool, &pool, SolverConfig::default());
        let result = analyzer.analyze(&Word::new("crate").unwrap(), &[]);
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn answer_outside_candidates_is_inconsistent() {
        let pool = lists();
        let answers = words(&["crate", "grate"]);
        let analyzer = Analyzer::new(&pool, &answers, SolverConfig::default());

        let result = analyzer.analyze(&Word::new("slate").unwrap(), &words(&["slate"]));
        assert_eq!(result, Err(SolverError::Inconsistent { remaining: 2 }));
    }

    #[test]
    fn comparison_includes_solver_game() {
        let pool = lists();
        let analyzer = Analyzer::new(&pool, &pool, SolverConfig::default());
        let answer = Word::new("grate").unwrap();

        let comparison = analyzer
            .compare_with_optimal(&answer, &words(&["house", "crate", "grate"]))
            .unwrap();

        assert!(comparison.optimal.is_solved());
        assert_eq!(
            comparison.guess_difference(),
            3 - comparison.optimal.steps.len() as isize
        );
    }
}
