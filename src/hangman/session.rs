//! The round loop and the play-again loop around it.

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::input::InputReader;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::error::{HangmanError, Result};
use crate::hangman::renderer::format_word;
use crate::hangman::{Dictionary, HangmanRenderer, HangmanState, RoundOutcome};

pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? [Y or N]";
pub const WIN_MESSAGE: &str = "You Win!!!! :)";
pub const LOSS_MESSAGE: &str = "Game over. You lost.";
const BANNER_RULE: &str = "--------------------------";

/// Tally of the rounds finished in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub won: usize,
    pub lost: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won => self.won += 1,
            RoundOutcome::Lost => self.lost += 1,
        }
    }

    pub fn rounds(&self) -> usize {
        self.won + self.lost
    }
}

pub struct Hangman<G: Rng> {
    config: GameConfig,
    dictionary: Dictionary,
    rng: G,
}

impl<G: Rng> Hangman<G> {
    pub fn new(config: GameConfig, dictionary: Dictionary, rng: G) -> Self {
        Self { config, dictionary, rng }
    }

    /// Play rounds until the player declines another one or input runs out.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R>,
        ctx: &mut TerminalContext<W>,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            match self.play_round(input, ctx) {
                Ok(outcome) => summary.record(outcome),
                Err(HangmanError::InputClosed) => {
                    info!("Input closed during a round, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }

            match input.confirm(ctx, PLAY_AGAIN_PROMPT) {
                Ok(true) => continue,
                Ok(false) | Err(HangmanError::InputClosed) => break,
                Err(err) => return Err(err),
            }
        }

        ctx.empty_line()?;
        ctx.flush()?;
        info!(won = summary.won, lost = summary.lost, "Session finished");

        Ok(summary)
    }

    /// Pick a fresh secret word and play it to the end.
    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R>,
        ctx: &mut TerminalContext<W>,
    ) -> Result<RoundOutcome> {
        let word = self.dictionary.pick_secret_word(&mut self.rng)?.to_string();
        debug!(len = word.chars().count(), "Round started");

        let mut state = HangmanState::new(word, self.config.max_wrong);
        self.play(&mut state, input, ctx)
    }

    /// Drive `state` until it is won or lost, then announce the result.
    pub fn play<R: BufRead, W: Write>(
        &self,
        state: &mut HangmanState,
        input: &mut InputReader<R>,
        ctx: &mut TerminalContext<W>,
    ) -> Result<RoundOutcome> {
        if self.config.clear_screen {
            ctx.clear_screen()?;
        }

        let outcome = loop {
            if let Some(outcome) = state.outcome() {
                break outcome;
            }

            HangmanRenderer.render(state, ctx)?;
            let letter = input.get_guess(ctx)?;
            let result = state.guess(letter);
            debug!(%letter, ?result, wrong = state.wrong_count(), "Guess applied");
        };

        HangmanRenderer.render(state, ctx)?;
        match outcome {
            RoundOutcome::Won => announce(ctx, WIN_MESSAGE, TerminalColor::Green)?,
            RoundOutcome::Lost => {
                ctx.print_line(&format_word(state.word()))?;
                announce(ctx, LOSS_MESSAGE, TerminalColor::Red)?;
            }
        }

        info!(?outcome, word = state.word(), wrong = state.wrong_count(), "Round finished");
        Ok(outcome)
    }
}

fn announce<W: Write>(
    ctx: &mut TerminalContext<W>,
    message: &str,
    color: TerminalColor,
) -> Result<()> {
    ctx.print_line(BANNER_RULE)?;
    ctx.print_colored_line(message, color)?;
    ctx.print_line(BANNER_RULE)?;
    Ok(())
}
