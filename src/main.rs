use anyhow::{Context, Result};
use hangterm::core::input::InputReader;
use hangterm::core::terminal::TerminalContext;
use hangterm::{Dictionary, GameConfig, Hangman};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with the game screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "hangterm=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env()?;
    let path = config.resolve_word_list();
    let dictionary = Dictionary::load(&path).context("Error reading from file")?;

    // Seeded once per process, not per round
    let rng = StdRng::from_os_rng();
    let mut game = Hangman::new(config, dictionary, rng);

    let mut input = InputReader::stdin();
    let mut ctx = TerminalContext::stdout();
    let summary = game.run(&mut input, &mut ctx)?;
    tracing::debug!(rounds = summary.rounds(), "Exiting");

    Ok(())
}
