//! Token-based console input, read the way a terminal user types it:
//! whitespace-delimited words, any number per line.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Write};

use tracing::debug;

use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::error::{HangmanError, Result};

pub const GUESS_PROMPT: &str = "Enter your guess: ";
pub const INVALID_GUESS: &str = "Invalid, Please try again.";

pub struct InputReader<R: BufRead> {
    source: R,
    pending: VecDeque<String>,
}

impl InputReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-delimited token. Blocks until one is available and
    /// fails with `InputClosed` once the source is exhausted.
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Err(HangmanError::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Prompt until the player enters a token starting with a letter.
    /// The letter is returned lowercased.
    pub fn get_guess<W: Write>(&mut self, ctx: &mut TerminalContext<W>) -> Result<char> {
        loop {
            ctx.print(GUESS_PROMPT)?;
            ctx.flush()?;

            match parse_guess(&self.next_token()?) {
                Ok(letter) => return Ok(letter),
                Err(err) => {
                    debug!(%err, "rejected guess");
                    ctx.print_colored_line(INVALID_GUESS, TerminalColor::Yellow)?;
                }
            }
        }
    }

    /// Ask a yes/no question; only a leading 'y' or 'Y' counts as yes.
    pub fn confirm<W: Write>(
        &mut self,
        ctx: &mut TerminalContext<W>,
        prompt: &str,
    ) -> Result<bool> {
        ctx.print(prompt)?;
        ctx.flush()?;

        let answer = self.next_token()?;
        Ok(answer.chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
    }
}

pub fn parse_guess(token: &str) -> Result<char> {
    match token.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(HangmanError::InvalidInput(token.to_string())),
    }
}
