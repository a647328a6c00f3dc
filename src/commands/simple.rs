//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameError, MAX_ATTEMPTS, Outcome, Session};
use crate::output::{print_round, print_summary, print_welcome};
use crate::providers::GameCounter;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Play one game, reading one guess per line from `input`
///
/// Guesses of the wrong length are refused with a message and do not use up an
/// attempt. The game id is drawn from `counter` once, before the first guess.
///
/// # Errors
///
/// Returns an error if the counter cannot be advanced, on I/O failure, or if
/// `input` runs out before the game is decided.
pub fn run_simple<R: BufRead>(
    mut session: Session,
    counter: &mut dyn GameCounter,
    input: &mut R,
) -> Result<Outcome> {
    print_welcome(session.word_length());
    let game_id = counter.next().context("could not advance the game counter")?;
    debug!(game_id, "game started");

    while !session.is_over() {
        let prompt = format!("Attempt {}", session.attempts() + 1);
        let Some(line) = get_user_input(&prompt, input)? else {
            bail!(
                "input closed after {} of {MAX_ATTEMPTS} attempts",
                session.attempts()
            );
        };

        match session.submit(&line) {
            Ok(round) => print_round(round),
            Err(GameError::LengthMismatch { expected, .. }) => {
                println!("{}", format!("Word must be of {expected} letters length!").red());
            }
            Err(e) => return Err(e.into()),
        }
    }

    let report = session
        .report()
        .context("finished game produced no report")?;
    print_summary(&report, game_id);

    Ok(report.outcome())
}

/// Get user input with a prompt, `None` once the input is exhausted
fn get_user_input<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::providers::SequenceCounter;
    use std::io::Cursor;

    fn play(secret: &str, lines: &str) -> Result<Outcome> {
        let session = Session::new(Word::new(secret).unwrap());
        let mut counter = SequenceCounter::default();
        run_simple(session, &mut counter, &mut Cursor::new(lines.to_string()))
    }

    #[test]
    fn win_on_second_attempt() {
        let outcome = play("crane", "slate\ncrane\n").unwrap();
        assert_eq!(outcome, Outcome::Won { attempts: 2 });
    }

    #[test]
    fn wrong_length_is_retried_without_cost() {
        let outcome = play("crane", "cat\ncranes\n\nCRANE\n").unwrap();
        assert_eq!(outcome, Outcome::Won { attempts: 1 });
    }

    #[test]
    fn loss_after_six_misses() {
        let outcome = play("crane", &"slate\n".repeat(6)).unwrap();
        assert_eq!(outcome, Outcome::Lost);
    }

    #[test]
    fn extra_input_after_game_is_ignored() {
        let outcome = play("ab", "ab\nba\nba\n").unwrap();
        assert_eq!(outcome, Outcome::Won { attempts: 1 });
    }

    #[test]
    fn input_exhausted_mid_game_is_error() {
        let err = play("crane", "slate\n").unwrap_err();
        assert!(err.to_string().contains("input closed after 1 of 6"));
    }

    #[test]
    fn counter_advanced_once_per_game() {
        let mut counter = SequenceCounter::new(41);
        let session = Session::new(Word::new("crane").unwrap());
        run_simple(session, &mut counter, &mut Cursor::new("crane\n")).unwrap();
        assert_eq!(counter.next().unwrap(), 43);
    }
}
