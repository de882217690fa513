//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: prompt for guesses, print colored
//! feedback rows, recap the board at game end.

use crate::core::Word;
use crate::game::{GameSession, GameState, GuessError, RandomPicker};
use crate::output::formatters::{feedback_to_emoji, guess_row};
use colored::Colorize;
use std::io::{self, Write};

/// Run the plain CLI game loop
///
/// Plays full games against random secrets from `words` until the player
/// declines another round.
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error reading
/// user input.
pub fn run_play(words: &[Word], max_attempts: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      W O R D L E                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret 5-letter word in {max_attempts} attempts.");
    println!("After each guess: 🟩 right spot, 🟨 wrong spot, ⬜ not in word.\n");

    let mut picker = RandomPicker::new();

    loop {
        let mut game =
            GameSession::new(words, max_attempts, &mut picker).map_err(|e| e.to_string())?;

        play_one_game(&mut game)?;

        match get_user_input("Play again? (y/n)")?.to_lowercase().as_str() {
            "y" | "yes" => println!(),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn play_one_game(game: &mut GameSession) -> Result<(), String> {
    while !game.is_over() {
        let prompt = format!("Guess {}/{}", game.attempts() + 1, game.max_attempts());
        let input = get_user_input(&prompt)?;

        match game.submit_guess(&input) {
            Ok(turn) => {
                println!(
                    "  {}  {}",
                    guess_row(turn.guess(), turn.feedback()),
                    feedback_to_emoji(turn.feedback())
                );
            }
            Err(GuessError::InvalidWord(err)) => {
                println!("❌ {err}\n");
            }
            // Unreachable while the loop checks is_over, but harmless
            Err(GuessError::GameOver) => break,
        }
    }

    print_game_end(game);
    Ok(())
}

fn print_game_end(game: &GameSession) {
    let secret = game.secret().text().to_uppercase();

    println!("\n{}", "═".repeat(40).bright_cyan());
    match game.state() {
        GameState::Won => {
            let attempts = game.attempts();
            println!("{}", "🎉 You guessed it!".bright_green().bold());
            println!(
                "The word was {} - solved in {} {}.",
                secret.bright_white().bold(),
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        GameState::Lost => {
            println!("{}", "💔 Out of attempts!".bright_red().bold());
            println!("The word was {}.", secret.bright_white().bold());
        }
        GameState::AwaitingGuess => {}
    }

    // Board recap
    println!("\nYour board:");
    for turn in game.turns() {
        println!("  {}", feedback_to_emoji(turn.feedback()));
    }
    println!("{}\n", "═".repeat(40).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
