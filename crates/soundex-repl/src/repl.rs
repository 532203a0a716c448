//! Read words, print their codes.

use anyhow::{Context, Result};
use soundex_core::PhoneticEncoder;
use std::io::{BufRead, Write};
use tracing::debug;

/// Token that ends the loop (compared after upper-casing).
pub const QUIT_TOKEN: &str = "Q";

/// Outcome of a REPL session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplSummary {
    /// Number of words encoded and printed.
    pub encoded: usize,
    /// Whether the session ended on the quit token rather than end of input.
    pub quit: bool,
}

/// Read whitespace-delimited tokens from `input`, upper-case each and write
/// `"<TOKEN>: <code>"` to `output` until `Q` or end of input.
pub fn run<E, R, W>(encoder: &E, input: R, mut output: W) -> Result<ReplSummary>
where
    E: PhoneticEncoder + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "starting loop to encode input")?;
    writeln!(output, "enter '{QUIT_TOKEN}' to cancel")?;

    let mut summary = ReplSummary { encoded: 0, quit: false };
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        for token in line.split_whitespace() {
            let word = token.to_uppercase();
            if word == QUIT_TOKEN {
                debug!(encoded = summary.encoded, "quit token received");
                summary.quit = true;
                output.flush()?;
                return Ok(summary);
            }
            let code = encoder
                .encode(&word)
                .with_context(|| format!("failed to encode {word:?}"))?;
            writeln!(output, "{word}: {code}")?;
            summary.encoded += 1;
        }
        output.flush()?;
    }

    debug!(encoded = summary.encoded, "end of input");
    Ok(summary)
}
