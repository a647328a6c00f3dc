//! Terminal output formatting
//!
//! Maps letter statuses to colours and emoji, and prints rounds and summaries.

pub mod display;
pub mod formatters;

pub use display::{print_round, print_summary, print_welcome};
