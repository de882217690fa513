//! TUI application state and logic

use crate::core::{LetterResult, Word};
use crate::game::{GameSession, GameState, GuessError, RandomPicker, SessionError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    words: Vec<Word>,
    picker: RandomPicker,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a guess into the input row
    Typing,
    /// Game ended; waiting for new-game/quit choice
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by attempts used (index 0 = won in one guess)
    pub guess_distribution: Vec<usize>,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns `SessionError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>, max_attempts: usize) -> Result<Self, SessionError> {
        let mut picker = RandomPicker::new();
        let session = GameSession::new(&words, max_attempts, &mut picker)?;

        Ok(Self {
            words,
            picker,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the secret word in {max_attempts} attempts!"),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; max_attempts],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Typing,
        })
    }

    /// Submit the typed buffer as a guess
    pub fn submit_current_guess(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit_guess(&input) {
            Ok(_) => {
                self.input_buffer.clear();
                match self.session.state() {
                    GameState::Won => self.on_win(),
                    GameState::Lost => self.on_loss(),
                    GameState::AwaitingGuess => {
                        let left = self.session.attempts_left();
                        self.add_message(
                            &format!(
                                "{left} {} left",
                                if left == 1 { "attempt" } else { "attempts" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(GuessError::InvalidWord(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(GuessError::GameOver) => {
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    fn on_win(&mut self) {
        let attempts = self.session.attempts();
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        if let Some(slot) = self.stats.guess_distribution.get_mut(attempts - 1) {
            *slot += 1;
        }

        let celebration = match attempts {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            _ => "🎉 SOLVED! 🎉",
        };

        self.input_mode = InputMode::GameOver;
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn on_loss(&mut self) {
        self.stats.total_games += 1;

        self.input_mode = InputMode::GameOver;
        self.add_message(
            &format!(
                "💔 Out of attempts! The word was {}.",
                self.session.secret().text().to_uppercase()
            ),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh game with a newly drawn secret
    pub fn new_game(&mut self) {
        let max_attempts = self.session.max_attempts();

        // The word list was non-empty at construction, so the draw succeeds
        if let Ok(session) = GameSession::new(&self.words, max_attempts, &mut self.picker) {
            self.session = session;
        }

        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best-known classification per alphabet letter across this session
    ///
    /// Correct outranks Present outranks Absent; unguessed letters are
    /// `None`. Drives the letter tracker panel.
    #[must_use]
    pub fn letter_status(&self) -> [Option<LetterResult>; 26] {
        fn rank(result: LetterResult) -> u8 {
            match result {
                LetterResult::Correct => 2,
                LetterResult::Present => 1,
                LetterResult::Absent => 0,
            }
        }

        let mut status: [Option<LetterResult>; 26] = [None; 26];
        for turn in self.session.turns() {
            for (&ch, result) in turn.guess().chars().iter().zip(turn.feedback()) {
                let slot = &mut status[usize::from(ch - b'a')];
                if slot.is_none_or(|current| rank(result) > rank(current)) {
                    *slot = Some(result);
                }
            }
        }
        status
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Ignore other keys until a choice is made
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        if app.input_buffer.len() < 5 {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        if app.input_buffer.len() == 5 {
                            app.submit_current_guess();
                        } else {
                            app.add_message(
                                "Word must be exactly 5 letters!",
                                MessageStyle::Error,
                            );
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_words() -> Vec<Word> {
        ["fiber", "movie", "party"]
            .iter()
            .map(|&w| Word::new(w).unwrap())
            .collect()
    }

    fn app_with_secret(secret: &str, max_attempts: usize) -> App {
        let mut app = App::new(test_words(), max_attempts).unwrap();
        app.session = GameSession::with_secret(Word::new(secret).unwrap(), max_attempts);
        app
    }

    #[test]
    fn new_requires_words() {
        assert!(App::new(Vec::new(), 5).is_err());
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let mut app = app_with_secret("fiber", 5);
        app.input_buffer = "fiber".to_string();
        app.submit_current_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[0], 1);
    }

    #[test]
    fn losing_updates_stats_and_reveals() {
        let mut app = app_with_secret("fiber", 2);
        for _ in 0..2 {
            app.input_buffer = "movie".to_string();
            app.submit_current_guess();
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("FIBER"))
        );
    }

    #[test]
    fn invalid_guess_consumes_no_attempt() {
        let mut app = app_with_secret("fiber", 5);
        app.input_buffer = "mov1e".to_string();
        app.submit_current_guess();

        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn letter_status_ranks_correct_over_present() {
        let mut app = app_with_secret("fiber", 5);

        // E is Present here (secret has e at index 3, guess at index 4)
        app.input_buffer = "movie".to_string();
        app.submit_current_guess();
        assert_eq!(
            app.letter_status()[usize::from(b'e' - b'a')],
            Some(LetterResult::Present)
        );
        assert_eq!(
            app.letter_status()[usize::from(b'v' - b'a')],
            Some(LetterResult::Absent)
        );
        assert_eq!(app.letter_status()[usize::from(b'z' - b'a')], None);

        // Now E lands on its exact spot and the tracker upgrades it
        app.input_buffer = "fiber".to_string();
        app.submit_current_guess();
        assert_eq!(
            app.letter_status()[usize::from(b'e' - b'a')],
            Some(LetterResult::Correct)
        );
    }

    #[test]
    fn new_game_resets_board_but_not_stats() {
        let mut app = app_with_secret("fiber", 5);
        app.input_buffer = "fiber".to_string();
        app.submit_current_guess();

        app.new_game();
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.stats.total_games, 1);
    }
}
