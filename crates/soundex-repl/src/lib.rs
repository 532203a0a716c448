//! Soundex REPL — line-oriented driver around a phonetic encoder.

pub mod cli;
pub mod repl;

pub use cli::Args;
pub use repl::{run, ReplSummary, QUIT_TOKEN};
