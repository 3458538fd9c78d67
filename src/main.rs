//! Wordle Coach - CLI
//!
//! Entropy-maximizing Wordle solver and game analyzer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_coach::{
    commands::{
        analyze_guesses, random_answer, run_benchmark, solve_word, suggest_next, word_entropy,
    },
    config::SolverConfig,
    core::Word,
    output::{
        print_benchmark_result, print_entropy_result, print_game_comparison, print_solve_report,
        print_suggestion,
    },
    solver::Solver,
    wordlists::{builtin_words, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_coach",
    about = "Entropy-maximizing Wordle solver with skill and luck analysis",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer list file, one word per line (default: built-in list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Guess pool file (default: the answer list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Hard mode: only guess words that are still possible answers
    #[arg(long, global = true)]
    hard: bool,

    /// Maximum number of guesses per game
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Score at most this many pool words per round besides the candidates
    #[arg(long, global = true)]
    pool_limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Solve a randomly drawn answer
        #[arg(short, long, conflicts_with = "word")]
        random: bool,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rate the skill and luck of a played game
    Analyze {
        /// The game's answer
        answer: String,

        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Suggest the next guess from feedback so far
    Suggest {
        /// Observations as WORD=PATTERN, e.g. crane=__Y_G
        observations: Vec<String>,

        /// Number of suggestions
        #[arg(short = 'k', long, default_value_t = 5)]
        top: usize,
    },

    /// Show the entropy of a word against all answers
    Entropy {
        /// Word to measure
        word: String,
    },

    /// Benchmark solver performance
    Bench {
        /// Number of answers to solve (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn load_list(path: Option<&Path>, length: usize) -> Result<Option<Vec<Word>>> {
    path.map(|path| load_from_file(path, length)).transpose()
}

/// Load answers and guess pool
///
/// Returns (`guess_pool`, `answer_words`). Missing files fall back to the
/// built-in list, and answers missing from the pool are added to it.
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let answers = match load_list(cli.answers.as_deref(), cli.length)? {
        Some(words) => words,
        None => builtin_words(cli.length).context("the built-in list only has five-letter words")?,
    };

    let mut pool = load_list(cli.guesses.as_deref(), cli.length)?.unwrap_or_else(|| answers.clone());
    let missing: Vec<Word> = answers.iter().filter(|w| !pool.contains(w)).cloned().collect();
    if !missing.is_empty() {
        log::info!("adding {} answers missing from the guess pool", missing.len());
        pool.extend(missing);
    }

    Ok((pool, answers))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (guess_pool, answer_words) = load_wordlists(&cli)?;

    let config = SolverConfig::new(cli.length)
        .with_hard_mode(cli.hard)
        .with_max_guesses(cli.max_guesses)
        .with_pool_limit(cli.pool_limit);
    let solver = Solver::new(&guess_pool, &answer_words, config);

    match &cli.command {
        Commands::Solve {
            word,
            random,
            verbose,
        } => {
            let target = match word {
                Some(word) if !random => word.clone(),
                _ => random_answer(&answer_words, &mut rand::rng())?.to_string(),
            };
            let report = solve_word(&solver, &target)?;
            print_solve_report(&report, *verbose);
        }
        Commands::Analyze { answer, guesses } => {
            let comparison = analyze_guesses(&solver, answer, guesses.as_slice())?;
            print_game_comparison(&comparison);
        }
        Commands::Suggest { observations, top } => {
            let suggestion = suggest_next(&solver, observations.as_slice(), *top)?;
            print_suggestion(&suggestion);
        }
        Commands::Entropy { word } => {
            let result = word_entropy(&solver, word)?;
            print_entropy_result(&result);
        }
        Commands::Bench { count } => {
            let count = count.unwrap_or(answer_words.len()).min(answer_words.len());
            println!("Running benchmark on {count} answers...");
            let result = run_benchmark(&solver, &answer_words[..count], true);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
