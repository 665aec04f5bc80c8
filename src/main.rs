//! Letter Draw - CLI
//!
//! Play the letter-draw word game in a TUI or a simple line mode, score words
//! and search for the best word of a draw.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_draw::{
    commands::{
        BenchmarkConfig, best_command, generate_draws, run_benchmark, run_simple, score_command,
    },
    game::{DrawPolicy, Session},
    output::{print_benchmark_result, print_best_result, print_round_result},
    wordlists::{SetDictionary, loader},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "letter_draw",
    about = "Letter-draw word game: use the drawn letters, in order, with no gaps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, French words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Draw policy: weighted (default, rare letters less likely) or uniform
    #[arg(long, global = true, default_value = "weighted")]
    policy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a word against a draw
    Score {
        /// The four drawn letters, e.g. RAME or "R A M E"
        draw: String,

        /// The word to score
        word: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the best dictionary word for a draw
    Best {
        /// The four drawn letters
        draw: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Benchmark the best-word search over random draws
    Benchmark {
        /// Number of random draws to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for draw generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<SetDictionary> {
    match wordlist {
        "embedded" => Ok(loader::embedded_dictionary()),
        path => loader::dictionary_from_file(path)
            .with_context(|| format!("Failed to load word list '{path}'")),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;
    let policy = DrawPolicy::from_name(&cli.policy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, policy),
        Commands::Simple => run_simple(&dictionary, policy).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { draw, word, json } => run_score_command(&draw, &word, json, &dictionary),
        Commands::Best { draw, json } => run_best_command(&draw, json, &dictionary),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, policy, &dictionary);
            Ok(())
        }
    }
}

fn run_score_command(draw: &str, word: &str, json: bool, dictionary: &SetDictionary) -> Result<()> {
    let result = score_command(draw, word, dictionary)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_round_result(&result);
    }
    Ok(())
}

fn run_best_command(draw: &str, json: bool, dictionary: &SetDictionary) -> Result<()> {
    let report = best_command(draw, dictionary)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.best)?);
    } else {
        print_best_result(&report);
    }
    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64, policy: DrawPolicy, dictionary: &SetDictionary) {
    println!(
        "Running benchmark on {count} random draws ({} words, seed {seed})...",
        dictionary.len()
    );

    let config = BenchmarkConfig {
        policy,
        show_progress: true,
        ..BenchmarkConfig::new(count, seed)
    };
    let draws = generate_draws(&config);
    let result = run_benchmark(dictionary, &draws, config.show_progress);
    print_benchmark_result(&result);
}

fn run_play_command(dictionary: &SetDictionary, policy: DrawPolicy) -> Result<()> {
    use letter_draw::interactive::{App, run_tui};

    let session = Session::with_random_draw(dictionary, policy, &mut rand::rng());
    run_tui(App::new(session))
}
