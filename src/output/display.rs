//! Display functions for the line-based game

use super::formatters::{colorize_round, feedback_to_emoji, format_summary};
use crate::game::{MAX_ATTEMPTS, Report, Round};
use colored::Colorize;

/// Print the opening banner
pub fn print_welcome(length: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "{}",
        format!("Welcome to WORDLE! Guess the {length}-letter word.")
            .bright_green()
            .bold()
    );
    println!("You have {MAX_ATTEMPTS} attempts.");
    println!("{}\n", "═".repeat(60).cyan());
}

/// Print one accepted round: coloured tiles, then the emoji line
pub fn print_round(round: &Round) {
    println!(
        "{} {}",
        colorize_round(round),
        feedback_to_emoji(round.feedback())
    );
}

/// Print the end-of-game summary, plus the answer when the game was lost
pub fn print_summary(report: &Report<'_>, game_id: u64) {
    println!();
    print!("{}", format_summary(report, game_id));
    println!();

    if report.is_win() {
        println!("{}", "✅ Solved!".green().bold());
    } else {
        println!(
            "{} {}",
            "Game Over! The correct word was:".red().bold(),
            report.secret().text().to_uppercase().bright_yellow().bold()
        );
    }
}
