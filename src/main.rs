//! Wordle - CLI
//!
//! Wordle-style word guessing game with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_play,
    core::Word,
    interactive::{App, run_tui},
    wordlists::{
        BUILTIN,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret 5-letter word before your attempts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Append a custom word list file to the built-in words
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Maximum number of guesses per game
    #[arg(short, long, global = true, default_value = "5")]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain prompt-and-print game loop)
    Simple,
}

/// Assemble the word list: built-in words plus an optional custom file
///
/// A custom file that cannot be read is a fatal startup error; the game
/// never starts with a word list it could not load as requested.
fn load_words(custom: Option<&str>) -> Result<Vec<Word>> {
    let mut words = words_from_slice(BUILTIN);

    if let Some(path) = custom {
        let custom_words = load_from_file(path)
            .with_context(|| format!("Failed to read word list '{path}'"))?;
        words.extend(custom_words);
    }

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(words, cli.attempts)?;
            run_tui(app)
        }
        Commands::Simple => run_play(&words, cli.attempts).map_err(|e| anyhow::anyhow!(e)),
    }
}
