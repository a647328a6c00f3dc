//! Command implementations

pub mod score;
pub mod simple;
pub mod start;

pub use score::score_words;
pub use simple::run_simple;
pub use start::start_session;
