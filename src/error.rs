use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("word list not found: {path}")]
    WordListNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary is empty, cannot pick a secret word")]
    EmptyDictionary,

    #[error("invalid guess: {0:?}")]
    InvalidInput(String),

    #[error("standard input closed")]
    InputClosed,

    #[error("config error: {0}")]
    Config(String),

    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
