//! TUI application state and logic

use crate::core::fold_case;
use crate::game::{GameError, GameState, MAX_ATTEMPTS, Outcome, Session};
use crate::providers::{GameCounter, WordSource};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Application state
pub struct App {
    source: Box<dyn WordSource>,
    counter: Box<dyn GameCounter>,
    pub length: usize,
    pub session: Session,
    pub game_id: u64,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index n counts games won in n guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    pub fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        if let Outcome::Won { attempts } = outcome {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns an error if the first secret or game id cannot be obtained.
    pub fn new(
        source: Box<dyn WordSource>,
        mut counter: Box<dyn GameCounter>,
        length: usize,
    ) -> Result<Self> {
        let session = Session::start(source.as_ref(), length)
            .with_context(|| format!("could not start a {length}-letter game"))?;
        let game_id = counter.next().context("could not advance the game counter")?;

        let mut app = Self {
            source,
            counter,
            length,
            session,
            game_id,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!("Welcome! Guess the {length}-letter word in {MAX_ATTEMPTS} tries."),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Replace the current game with a fresh one
    ///
    /// On failure the finished game stays on screen and an error is shown.
    pub fn new_game(&mut self) {
        let started = Session::start(self.source.as_ref(), self.length)
            .map_err(anyhow::Error::from)
            .and_then(|session| Ok((session, self.counter.next()?)));

        match started {
            Ok((session, game_id)) => {
                self.session = session;
                self.game_id = game_id;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                info!(game_id, "new game");
            }
            Err(e) => {
                warn!(error = %e, "could not start new game");
                self.add_message(&format!("Could not start a new game: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let submitted = self.session.submit(&self.input_buffer).map(|_| ());
        let outcome = match submitted {
            Ok(()) => {
                self.input_buffer.clear();
                self.session.report().map(|r| r.outcome())
            }
            Err(GameError::LengthMismatch { expected, .. }) => {
                self.add_message(
                    &format!("Word must be of {expected} letters length!"),
                    MessageStyle::Error,
                );
                return;
            }
            Err(e @ GameError::AlreadyTerminal(_)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match outcome {
            Some(outcome @ Outcome::Won { attempts }) => {
                self.stats.record(outcome);
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Some(outcome @ Outcome::Lost) => {
                self.stats.record(outcome);
                self.add_message(
                    &format!(
                        "Game over! The word was {}",
                        self.session.secret().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            None => {
                let left = self.session.attempts_remaining();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "try" } else { "tries" }),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Game finished, ignore other keys
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.input_buffer.chars().count() < self.length {
                    self.input_buffer.push(fold_case(c));
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
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

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.session.state()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
