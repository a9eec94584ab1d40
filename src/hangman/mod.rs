/// Hangman game module
pub mod dictionary;
pub mod game;
pub mod renderer;
pub mod session;

pub use dictionary::Dictionary;
pub use game::{GuessOutcome, HangmanState, RoundOutcome};
pub use renderer::HangmanRenderer;
pub use session::{Hangman, SessionSummary};
