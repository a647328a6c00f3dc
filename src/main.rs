//! Wordle - CLI
//!
//! Terminal Wordle with a full-screen TUI and a plain line-based mode.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{run_simple, score_words, start_session},
    core::Word,
    interactive::{App, run_tui},
    output::print_round,
    providers::{
        FileCounter, FixedWord, GameCounter, RandomId, RandomWordApi, WordList, WordSource,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the hidden word
    #[arg(short, long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    length: u16,

    /// Pick words from a local list (one per line) instead of the web API
    #[arg(short = 'w', long, global = true)]
    word_file: Option<PathBuf>,

    /// Play against a fixed word (its length overrides --length)
    #[arg(long, global = true, conflicts_with = "word_file")]
    secret: Option<String>,

    /// Base URL of the random word API
    #[arg(long, global = true, env = "WORDLE_API_URL", default_value = RandomWordApi::DEFAULT_URL)]
    api_url: String,

    /// File holding the persistent game counter (random ids when omitted)
    #[arg(long, global = true, env = "WORDLE_COUNTER_FILE")]
    counter_file: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback for a guess against a known answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            let (source, length) = word_source(&cli)?;
            let app = App::new(source, game_counter(&cli), length)?;
            run_tui(app)
        }
        Commands::Simple => {
            let (source, length) = word_source(&cli)?;
            let mut counter = game_counter(&cli);
            let session = start_session(source.as_ref(), length)?;
            run_simple(session, counter.as_mut(), &mut io::stdin().lock())?;
            Ok(())
        }
        Commands::Score { guess, answer } => {
            let round = score_words(guess, answer)?;
            print_round(&round);
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_game={level},wordle={level}")));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Build the secret supply from the flags, returning it with the word length to ask for
fn word_source(cli: &Cli) -> Result<(Box<dyn WordSource>, usize)> {
    if let Some(secret) = &cli.secret {
        let word = Word::new(secret).context("invalid --secret")?;
        let length = word.len();
        debug!(length, "using fixed secret");
        return Ok((Box::new(FixedWord::new(word)), length));
    }

    let length = usize::from(cli.length);

    if let Some(path) = &cli.word_file {
        let list = WordList::from_file(path)
            .with_context(|| format!("could not load word list {}", path.display()))?;
        if list.is_empty() {
            warn!(path = %path.display(), "word list has no usable words");
        }
        return Ok((Box::new(list), length));
    }

    let api = RandomWordApi::new(cli.api_url.clone()).context("could not set up HTTP client")?;
    Ok((Box::new(api), length))
}

fn game_counter(cli: &Cli) -> Box<dyn GameCounter> {
    match &cli.counter_file {
        Some(path) => Box::new(FileCounter::new(path)),
        None => Box::new(RandomId),
    }
}
