//! Wordle
//!
//! A terminal word-guessing game: find a hidden word of configurable length in six
//! attempts, with per-letter feedback that handles duplicate letters correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, Word};
//! use wordle_game::game::{GameState, Session};
//!
//! let mut session = Session::new(Word::new("crane").unwrap());
//!
//! let round = session.submit("slate").unwrap();
//! assert_eq!(round.feedback().count(LetterStatus::Correct), 2);
//!
//! session.submit("crane").unwrap();
//! assert_eq!(session.state(), GameState::Won);
//! assert_eq!(session.report().unwrap().score_line(), "2/6");
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word sources and game counters
pub mod providers;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
