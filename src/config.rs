use std::env;
use std::path::{Path, PathBuf};

use crate::error::{HangmanError, Result};

/// Number of body parts the gallows can show.
pub const GALLOWS_PARTS: usize = 7;

pub const DEFAULT_WORD_LIST: &str = "words_alpha.txt";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word_list_path: PathBuf,
    /// Wrong guesses that end a round.
    pub max_wrong: usize,
    /// Clear the terminal at the start of every round.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list_path: PathBuf::from(DEFAULT_WORD_LIST),
            max_wrong: GALLOWS_PARTS,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Defaults, overridden by `HANGMAN_WORD_LIST`, `HANGMAN_MAX_WRONG`
    /// and `HANGMAN_CLEAR_SCREEN` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("HANGMAN_WORD_LIST") {
            config.word_list_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("HANGMAN_MAX_WRONG") {
            config.max_wrong = parse_max_wrong(&raw)?;
        }

        if let Some(raw) = lookup("HANGMAN_CLEAR_SCREEN") {
            config.clear_screen = parse_switch(&raw);
        }

        Ok(config)
    }

    /// Resolve the word list: relative paths are tried in the working
    /// directory first, then next to the running executable.
    pub fn resolve_word_list(&self) -> PathBuf {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        self.resolve_word_list_in(exe_dir.as_deref())
    }

    fn resolve_word_list_in(&self, fallback_dir: Option<&Path>) -> PathBuf {
        let path = &self.word_list_path;
        if path.is_absolute() || path.exists() {
            return path.clone();
        }

        fallback_dir
            .map(|dir| dir.join(path))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| path.clone())
    }
}

fn parse_switch(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

fn parse_max_wrong(raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| {
            HangmanError::Config(format!("HANGMAN_MAX_WRONG must be a number, got {raw:?}"))
        })?;

    if !(1..=GALLOWS_PARTS).contains(&value) {
        return Err(HangmanError::Config(format!(
            "HANGMAN_MAX_WRONG must be between 1 and {GALLOWS_PARTS}, got {value}"
        )));
    }

    Ok(value)
}
