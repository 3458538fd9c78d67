use wordle_coach::analysis::{NEUTRAL_LUCK, analyze_game, step_luck};
use wordle_coach::core::{Mark, Observation, Pattern, Word};
use wordle_coach::solver::entropy::calculate_entropy;
use wordle_coach::solver::{CandidateSet, SolveOutcome, Solver, best_guess, filter_candidates, filter_one};
use wordle_coach::wordlists::builtin_words;
use wordle_coach::SolverConfig;

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(w).unwrap()).collect()
}

fn sample() -> Vec<Word> {
    builtin_words(5).unwrap().into_iter().step_by(7).collect()
}

#[test]
fn test_self_pattern_is_all_correct() {
    for word in builtin_words(5).unwrap() {
        let pattern = Pattern::calculate(&word, &word).unwrap();
        assert!(pattern.is_solved(), "{word}");
        assert_eq!(pattern, Pattern::all_correct(5));
    }
}

#[test]
fn test_marks_respect_letter_multiplicity() {
    let sample = sample();
    for guess in &sample {
        for answer in &sample {
            let pattern = Pattern::calculate(guess, answer).unwrap();
            assert!(pattern.count_correct() <= guess.len());

            let answer_counts = answer.letter_counts();
            let mut marked = [0u8; 26];
            for (&letter, mark) in guess.chars().iter().zip(pattern.marks()) {
                if mark != Mark::Absent {
                    marked[usize::from(letter - b'A')] += 1;
                }
            }
            assert!(
                marked.iter().zip(answer_counts).all(|(&m, a)| m <= a),
                "{guess} vs {answer}: {pattern}"
            );
        }
    }
}

#[test]
fn test_duplicate_letter_examples() {
    let cases = [
        ("speed", "erase", "Y_YY_"),
        ("robot", "floor", "YY_G_"),
        ("llama", "hello", "YY___"),
        ("eerie", "there", "Y_Y_G"),
    ];
    for (guess, answer, expected) in cases {
        let pattern = Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).unwrap();
        assert_eq!(pattern.to_string(), expected, "{guess} vs {answer}");
    }
}

#[test]
fn test_filter_is_idempotent_and_order_independent() {
    let candidates = CandidateSet::from_slice(&builtin_words(5).unwrap());
    let answer = Word::new("plate").unwrap();
    let first = Observation::against(Word::new("crane").unwrap(), &answer).unwrap();
    let second = Observation::against(Word::new("moist").unwrap(), &answer).unwrap();

    let once = filter_one(&candidates, &first.guess, first.pattern);
    let twice = filter_one(&once, &first.guess, first.pattern);
    assert_eq!(once, twice);

    let forward = filter_candidates(&candidates, &[first.clone(), second.clone()]);
    let backward = filter_candidates(&candidates, &[second, first]);
    assert_eq!(forward, backward);
    assert!(forward.contains(&answer));
}

#[test]
fn test_best_guess_stays_in_pool() {
    let all = builtin_words(5).unwrap();
    let candidates = CandidateSet::from_slice(&all[..40]);

    let choice = best_guess(&candidates, &all, false).unwrap();
    assert!(all.contains(&choice.word));

    let hard = best_guess(&candidates, &all, true).unwrap();
    assert!(candidates.contains(&hard.word));
}

#[test]
fn test_entropy_bounds() {
    let all = builtin_words(5).unwrap();
    let candidates = &all[..64];
    let upper = (candidates.len() as f64).log2();

    for guess in all.iter().step_by(11) {
        let bits = calculate_entropy(guess, candidates);
        assert!(bits >= 0.0, "{guess}: {bits}");
        assert!(bits <= upper + 1e-9, "{guess}: {bits}");
    }
}

#[test]
fn test_house_mouse_rouse() {
    let candidates: CandidateSet = words(&["house", "mouse", "rouse"]).into_iter().collect();
    let mouse = Word::new("mouse").unwrap();
    let house = Word::new("house").unwrap();

    let pattern = Pattern::calculate(&mouse, &house).unwrap();
    assert_eq!(pattern.to_string(), "_GGGG");

    let remaining = filter_one(&candidates, &mouse, pattern);
    assert!(remaining.contains(&house));
    assert!(!remaining.contains(&mouse));

    let rouse = Observation::against(Word::new("rouse").unwrap(), &house).unwrap();
    let remaining = filter_candidates(&remaining, &[rouse]);
    assert_eq!(remaining.as_slice(), &[house]);
}

#[test]
fn test_solve_house_within_limit() {
    let all = builtin_words(5).unwrap();
    let solver = Solver::new(&all, &all, SolverConfig::default());

    let report = solver.solve(&Word::new("house").unwrap()).unwrap();
    assert!(report.steps.len() <= 6);
    match report.outcome {
        SolveOutcome::Solved => assert_eq!(report.guesses().last().unwrap().text(), "HOUSE"),
        SolveOutcome::ExhaustedAttempts => assert_eq!(report.steps.len(), 6),
        SolveOutcome::BudgetExceeded => panic!("no budget was set"),
    }
}

#[test]
fn test_solver_games_rate_full_skill() {
    let all = builtin_words(5).unwrap();
    let config = SolverConfig::default();
    let solver = Solver::new(&all, &all, config.clone());

    for answer in ["house", "crane", "pride", "ghost"] {
        let answer = Word::new(answer).unwrap();
        let played = solver.solve(&answer).unwrap();

        let report = analyze_game(&answer, &played.guesses(), &all, &all, &config).unwrap();
        for step in &report.steps {
            assert_eq!(step.skill, 99, "{answer}: turn {} {}", step.turn, step.guess);
        }
    }
}

#[test]
fn test_expected_elimination_is_neutral_luck() {
    for remaining in [1, 2, 7, 50] {
        assert_eq!(step_luck(remaining as f64, remaining), NEUTRAL_LUCK);
    }
}

#[test]
fn test_pattern_text_round_trips() {
    for text in ["GGGGG", "_____", "GY_YG", "Y_Y_Y", "__G__"] {
        let pattern: Pattern = text.parse().unwrap();
        assert_eq!(pattern.to_string(), text);
    }
    let emoji: Pattern = "🟩🟨⬜⬛🟩".parse().unwrap();
    assert_eq!(emoji.to_string(), "GY__G");
}
