//! TUI rendering with ratatui
//!
//! Board, keyboard hints, statistics and message log.

use super::app::{App, MessageStyle};
use crate::core::LetterStatus;
use crate::game::{GameState, MAX_ATTEMPTS};
use crate::output::formatters::format_summary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_uppercase()), style)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🎯 WORDLE #{} - {} letters",
        app.game_id, app.length
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2 + 8);

    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = if let Some(round) = history.get(row) {
            round
                .guess()
                .chars()
                .iter()
                .zip(round.feedback().iter())
                .map(|(&letter, status)| {
                    tile(
                        letter,
                        Style::default()
                            .fg(Color::Black)
                            .bg(status_color(status))
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect()
        } else if row == history.len() && !app.session.is_over() {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..app.length)
                .map(|i| match typed.get(i) {
                    Some(&letter) => tile(
                        letter,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => tile('_', Style::default().fg(Color::DarkGray)),
                })
                .collect()
        } else {
            (0..app.length)
                .map(|_| tile('·', Style::default().fg(Color::DarkGray)))
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(report) = app.session.report() {
        for text in format_summary(&report, app.game_id).lines() {
            lines.push(Line::from(text.to_string()));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Keyboard
            Constraint::Length(10), // Stats
            Constraint::Min(3),     // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = hints.get(&letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |&status| Style::default().fg(Color::Black).bg(status_color(status)),
                    );
                    Span::styled(letter.to_ascii_uppercase().to_string(), style)
                })
                .flat_map(|span| [span, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let mut lines = vec![Line::from(format!(
        "Played: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];

    for attempts in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[attempts];
        let width = count * 20 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::styled(
                "░".repeat(20 - width),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(" Statistics ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.state() {
        GameState::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        GameState::Lost => (
            " Out of tries | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Red,
        ),
        GameState::InProgress => (
            format!(
                " Attempt {}/{MAX_ATTEMPTS} | Type a {}-letter word and press Enter ",
                app.session.attempts() + 1,
                app.length
            ),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::providers::{FixedWord, SequenceCounter};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        App::new(
            Box::new(FixedWord::new(Word::new("crane").unwrap())),
            Box::new(SequenceCounter::new(41)),
            5,
        )
        .unwrap()
    }

    #[test]
    fn renders_fresh_game() {
        let text = screen_text(&app());
        assert!(text.contains("WORDLE #42"));
        assert!(text.contains("Attempt 1/6"));
        assert!(text.contains("Statistics"));
    }

    #[test]
    fn renders_finished_game_summary() {
        let mut app = app();
        app.input_buffer = "crane".to_string();
        app.submit_input();

        let text = screen_text(&app);
        assert!(text.contains("CONGRATULATIONS"));
        assert!(text.contains("Wordle 42 1/6"));
    }
}
