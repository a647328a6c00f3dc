//! Game session state machine
//!
//! Drives up to six rounds against a secret and reports the outcome.

mod report;
mod session;

pub use report::{Outcome, Report};
pub use session::{GameError, GameState, MAX_ATTEMPTS, Round, Session};
