//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use crate::game::{Report, Round};
use colored::Colorize;
use std::fmt::Write;

/// Emoji square for a letter status
#[must_use]
pub const fn status_to_emoji(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Absent => '⬛',
    }
}

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.iter().map(status_to_emoji).collect()
}

/// Guess letters on coloured tiles
#[must_use]
pub fn colorize_round(round: &Round) -> String {
    round
        .guess()
        .chars()
        .iter()
        .zip(round.feedback().iter())
        .map(|(letter, status)| {
            let tile = format!(" {} ", letter.to_uppercase());
            let colored = match status {
                LetterStatus::Correct => tile.black().on_green(),
                LetterStatus::Present => tile.black().on_yellow(),
                LetterStatus::Absent => tile.black().on_bright_black(),
            };
            colored.to_string()
        })
        .collect()
}

/// Share-style summary: header line, blank line, one `guess : emoji` per round
#[must_use]
pub fn format_summary(report: &Report<'_>, game_id: u64) -> String {
    let mut out = format!("Wordle {game_id} {}\n\n", report.score_line());
    for round in report.rounds() {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} : {}",
            round.guess(),
            feedback_to_emoji(round.feedback())
        );
    }
    out
}
