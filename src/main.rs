//! Spellstacks - CLI
//!
//! Daily 18-letter word puzzle with TUI and line-based play, plus tools for
//! inspecting and benchmarking rack generation.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use spellstacks::{
    commands::{check_word, daily_report, random_start_date, run_benchmark, run_simple, seed_report},
    core::today,
    dictionary::{Dictionary, Lexicon},
    generator::RackGenerator,
    output::{print_benchmark_result, print_check_result, print_daily_report, print_seed_report},
    session::{Game, Stats},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spellstacks",
    about = "Daily word puzzle: use all 18 letters in as few words as you can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle date as YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Ignore the word corpus and build racks from letter frequencies
    #[arg(long, global = true)]
    no_corpus: bool,

    /// Log generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Show the day's rack
    Today {
        /// Also print the words the rack was built from
        #[arg(long)]
        reveal: bool,
    },

    /// Print the day's seed
    Seed,

    /// Check whether a word is playable on the day's rack
    Check {
        /// Word to check
        word: String,
    },

    /// Generate racks for many days and report statistics
    Benchmark {
        /// Number of consecutive days to generate
        #[arg(short = 'n', long, default_value = "365")]
        days: usize,

        /// Start from a random date instead of --date
        #[arg(long)]
        random: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the built-in word list
/// - "<path>": custom list, falling back to the built-in one if unreadable
fn load_dictionary(wordlist: &str) -> Dictionary {
    match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::load_or_embedded(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist);
    let corpus = (!cli.no_corpus).then(|| dictionary.words());
    let date = cli.date.unwrap_or_else(today);
    let generator = RackGenerator::new();
    debug!(%date, words = dictionary.len(), corpus = corpus.is_some(), "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(date, &generator, corpus, &dictionary),
        Commands::Simple => run_simple_command(date, &generator, corpus, &dictionary),
        Commands::Today { reveal } => {
            print_daily_report(&daily_report(date, &generator, corpus), reveal);
            Ok(())
        }
        Commands::Seed => {
            print_seed_report(&seed_report(date));
            Ok(())
        }
        Commands::Check { word } => {
            let rack = generator.generate(date, corpus).rack;
            let result = check_word(&word, &rack, &dictionary).map_err(|e| anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Benchmark { days, random } => {
            let start = if random { random_start_date() } else { date };
            println!("Generating racks for {days} days from {start}...");
            let result = run_benchmark(&generator, corpus, start, days, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_simple_command(
    date: NaiveDate,
    generator: &RackGenerator,
    corpus: Option<&[String]>,
    dictionary: &Dictionary,
) -> Result<()> {
    let generated = generator.generate(date, corpus);
    let par = generated.par();
    let mut game = Game::new(date, generated.rack, dictionary);
    let mut stats = Stats::new();
    run_simple(&mut game, &mut stats, par).map_err(|e| anyhow!(e))
}

fn run_play_command(
    date: NaiveDate,
    generator: &RackGenerator,
    corpus: Option<&[String]>,
    dictionary: &Dictionary,
) -> Result<()> {
    use spellstacks::interactive::{App, run_tui};

    let generated = generator.generate(date, corpus);
    let par = generated.par();
    let app = App::new(Game::new(date, generated.rack, dictionary), par);
    run_tui(app)
}
