//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar, rating};
use crate::analysis::{GameComparison, StepAnalysis};
use crate::commands::{BenchmarkResult, EntropyResult, Suggestion};
use crate::solver::{SolveOutcome, SolveReport};
use colored::Colorize;
use std::cmp::Reverse;

/// Candidates listed before the rest are summarized
const CANDIDATE_PREVIEW: usize = 12;

fn header(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {} ", title.bright_cyan().bold(), subject.bright_yellow().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of solving a word
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    header("SOLVING:", report.answer.text());

    for (i, step) in report.steps.iter().enumerate() {
        let obs = &step.observation;
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&obs.guess, obs.pattern),
            obs.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.bits);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);

            let actual = (step.candidates_before as f64 / step.candidates_after.max(1) as f64).log2();
            println!("  Info gained: {actual:.3} bits");
        }
    }

    println!();
    let guesses = report.steps.len();
    match report.outcome {
        SolveOutcome::Solved => {
            println!("{}", format!("✅ Solved in {guesses} guesses!").green().bold());
        }
        SolveOutcome::ExhaustedAttempts => {
            println!("{}", format!("❌ Failed to solve in {guesses} guesses").red().bold());
        }
        SolveOutcome::BudgetExceeded => {
            println!(
                "{}",
                format!("⏱  Time budget spent after {guesses} guesses").yellow().bold()
            );
        }
    }
}

fn print_step(step: &StepAnalysis) {
    println!(
        "\nTurn {}: {} {}  skill {}  luck {}",
        step.turn,
        colored_guess(&step.guess, step.pattern),
        step.pattern.to_emoji(),
        rating(step.skill),
        step.luck.map_or_else(|| " -".dimmed(), rating)
    );
    println!(
        "  Candidates: {} → {}   ({:.2} bits expected, {:.2} gained)",
        step.remaining_before, step.remaining_after, step.guess_bits, step.actual_bits
    );

    if step.is_suboptimal() {
        println!("  Best:       {}", step.optimal.to_string().bright_green());
    }
    for alt in &step.alternatives {
        println!("  Consider:   {alt}");
    }
}

/// Print a rated game and the solver's line for the same answer
pub fn print_game_comparison(comparison: &GameComparison) {
    let player = &comparison.player;
    header("GAME ANALYSIS:", player.answer.text());

    for step in &player.steps {
        print_step(step);
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!(
        "   Result:          {}",
        if player.solved {
            format!("solved in {}", player.steps.len()).green()
        } else {
            "not solved".red()
        }
    );
    println!("   Average skill:   {:.1}", player.average_skill);
    println!("   Luck:            {}", rating(player.luck));
    if let Some(weakest) = player.weakest_step() {
        println!(
            "   Weakest guess:   turn {} ({}, skill {})",
            weakest.turn, weakest.guess, weakest.skill
        );
    }

    let optimal = &comparison.optimal;
    let line: Vec<String> = optimal.guesses().iter().map(ToString::to_string).collect();
    println!("\n🤖 {}", "Solver line:".bright_cyan().bold());
    println!("   {}  ({} guesses)", line.join(" → "), optimal.steps.len());

    match comparison.guess_difference() {
        0 => println!("   Same number of guesses as the solver"),
        diff if diff < 0 => println!("   {}", format!("{} fewer than the solver", -diff).green()),
        diff => println!("   {}", format!("{diff} more than the solver").yellow()),
    }
}

/// Print next-guess suggestions
pub fn print_suggestion(suggestion: &Suggestion) {
    if suggestion.solved {
        println!("{}", "✅ Already solved!".green().bold());
        return;
    }

    header("TURN", &suggestion.turn.to_string());
    println!("\n{} candidates remaining", suggestion.candidates.len());

    let preview: Vec<&str> = suggestion
        .candidates
        .iter()
        .take(CANDIDATE_PREVIEW)
        .map(|word| word.text())
        .collect();
    let more = suggestion.candidates.len().saturating_sub(CANDIDATE_PREVIEW);
    if more > 0 {
        println!("   {} … and {more} more", preview.join(" "));
    } else {
        println!("   {}", preview.join(" "));
    }

    let max_bits = suggestion.guesses.first().map_or(0.0, |best| best.bits);
    println!("\n💡 {}", "Suggested guesses:".bright_cyan().bold());
    for (rank, guess) in suggestion.guesses.iter().enumerate() {
        println!(
            "   {}. {} [{}] {:.3} bits",
            rank + 1,
            guess.word.text().bright_yellow().bold(),
            entropy_bar(guess.bits, max_bits, 20).green(),
            guess.bits
        );
    }
}

/// Print the metrics of one opening guess
pub fn print_entropy_result(result: &EntropyResult) {
    header("ENTROPY ANALYSIS:", result.word.text());

    let max_bits = (result.total_candidates.max(1) as f64).log2();
    let bar = entropy_bar(result.metrics.entropy, max_bits, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction());
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.metrics.max_partition);
    println!("   Patterns:    {}", result.metrics.partitions);
    if !result.in_pool {
        println!("   {}", "Not in the guess pool".yellow());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    header("BENCHMARK RESULTS", "");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {} ({:.1}%)", result.solved, result.success_rate());
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!("   Worst case:       {}", result.max_guesses.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    let opening = result
        .first_guesses
        .iter()
        .max_by_key(|&(word, count)| (*count, Reverse(word)));
    if let Some((word, _)) = opening {
        println!("   Opening guess:    {}", word.text().bright_yellow());
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> =
        result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    counts.sort_unstable();
    for (guess_count, count) in counts {
        let pct = count as f64 / result.total_words.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed.is_empty() {
        let failed: Vec<&str> = result.failed.iter().map(|word| word.text()).collect();
        println!("\n❌ {}: {}", "Unsolved".red().bold(), failed.join(" "));
    }
}
