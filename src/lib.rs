pub mod config;
pub mod core;
pub mod error;
pub mod hangman;

// Re-export for convenience
pub use crate::config::GameConfig;
pub use crate::error::{HangmanError, Result};
pub use crate::hangman::{Dictionary, Hangman, HangmanState, RoundOutcome};
