//! TUI rendering with ratatui
//!
//! Board grid, letter tracker, and status panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterResult;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

// Keyboard rows for the letter tracker
const TRACKER_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Tracker + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn tile_style(result: LetterResult) -> Style {
    match result {
        LetterResult::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterResult::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterResult::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile_span(ch: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    // Submitted rows
    for turn in app.session.turns() {
        let mut spans = Vec::with_capacity(9);
        for (&ch, result) in turn.guess().chars().iter().zip(turn.feedback()) {
            spans.push(tile_span(ch as char, tile_style(result)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // Input row for the in-progress guess
    if app.input_mode == InputMode::Typing {
        let mut spans = Vec::with_capacity(9);
        let typed: Vec<char> = app.input_buffer.chars().collect();
        for i in 0..5 {
            let (ch, style) = match typed.get(i) {
                Some(&c) => (
                    c,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                None => ('_', Style::default().fg(Color::DarkGray)),
            };
            spans.push(tile_span(ch, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // Remaining empty rows
    let used = app.session.attempts() + usize::from(app.input_mode == InputMode::Typing);
    for _ in used..app.session.max_attempts() {
        let mut spans = Vec::with_capacity(9);
        for _ in 0..5 {
            spans.push(tile_span('.', Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board ({}/{}) ",
                app.session.attempts(),
                app.session.max_attempts()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Letter tracker
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_tracker(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_tracker(f: &mut Frame, app: &App, area: Rect) {
    let status = app.letter_status();

    let lines: Vec<Line> = TRACKER_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|ch| {
                    let style = match status[usize::from(ch - b'a')] {
                        Some(result) => tile_style(result),
                        None => Style::default().fg(Color::Gray),
                    };
                    Span::styled(format!("{} ", (ch as char).to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let tracker = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(tracker, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    // Guess distribution as "1:0 2:3 ..." for won games
    let distribution = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| format!("{}:{count}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");
    let distribution_widget = Paragraph::new(format!("Wins by guess: {distribution}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(distribution_widget, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Type a word | Enter: Submit | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
