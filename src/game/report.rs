//! End-of-game summary
//!
//! A report borrows from the session it describes and is rebuilt on demand.

use super::session::{MAX_ATTEMPTS, Round};
use crate::core::Word;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won { attempts: usize },
    Lost,
}

/// Outcome plus the ordered rounds of a finished game
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    outcome: Outcome,
    rounds: &'a [Round],
    secret: &'a Word,
}

impl<'a> Report<'a> {
    pub(crate) const fn new(outcome: Outcome, rounds: &'a [Round], secret: &'a Word) -> Self {
        Self {
            outcome,
            rounds,
            secret,
        }
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> &'a [Round] {
        self.rounds
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &'a Word {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Won { .. })
    }

    /// Share-style score, `3/6` for a win and `X/6` for a loss
    #[must_use]
    pub fn score_line(&self) -> String {
        match self.outcome {
            Outcome::Won { attempts } => format!("{attempts}/{MAX_ATTEMPTS}"),
            Outcome::Lost => format!("X/{MAX_ATTEMPTS}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Word;
    use crate::game::{Outcome, Session};

    #[test]
    fn score_line_for_win() {
        let mut s = Session::new(Word::new("crane").unwrap());
        s.submit("slate").unwrap();
        s.submit("trace").unwrap();
        s.submit("crane").unwrap();

        let report = s.report().unwrap();
        assert!(report.is_win());
        assert_eq!(report.outcome(), Outcome::Won { attempts: 3 });
        assert_eq!(report.score_line(), "3/6");
        assert_eq!(report.secret().text(), "crane");
    }

    #[test]
    fn score_line_for_loss() {
        let mut s = Session::new(Word::new("ab").unwrap());
        for _ in 0..6 {
            s.submit("ba").unwrap();
        }

        let report = s.report().unwrap();
        assert!(!report.is_win());
        assert_eq!(report.outcome(), Outcome::Lost);
        assert_eq!(report.score_line(), "X/6");
        assert_eq!(report.rounds().len(), 6);
    }

    #[test]
    fn report_is_recomputed_from_history() {
        let mut s = Session::new(Word::new("ab").unwrap());
        s.submit("ab").unwrap();

        let first = s.report().unwrap().score_line();
        let second = s.report().unwrap().score_line();
        assert_eq!(first, second);
    }
}
