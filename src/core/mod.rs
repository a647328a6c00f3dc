//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types and the scorer. Everything
//! here is pure: no I/O, no randomness, no global state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, score};
pub use word::{Word, WordError, fold_case};
