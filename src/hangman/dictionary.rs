use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::{HangmanError, Result};

/// Ordered word list the secret words are drawn from.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load a newline-delimited word file. Blank lines are skipped and
    /// surrounding whitespace is trimmed; words are otherwise kept as-is.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| HangmanError::WordListNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_text(&content);
        tracing::info!("Loaded {} words from {}", dictionary.len(), path.display());

        Ok(dictionary)
    }

    pub fn from_text(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect();

        Self { words }
    }

    /// Pick a secret word uniformly at random.
    pub fn pick_secret_word<G: Rng>(&self, rng: &mut G) -> Result<&str> {
        if self.words.is_empty() {
            return Err(HangmanError::EmptyDictionary);
        }

        let index = rng.random_range(0..self.words.len());
        Ok(&self.words[index])
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_text_skips_blank_lines() {
        let dict = Dictionary::from_text("apple\r\n\nbanana  \n\n   \ncherry");
        assert_eq!(dict.words(), ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_words_are_not_normalised() {
        let dict = Dictionary::from_text("Zebra\n  co-op\n");
        assert_eq!(dict.words(), ["Zebra", "co-op"]);
    }

    #[test]
    fn test_empty_dictionary_cannot_pick() {
        let dict = Dictionary::from_text("");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(dict.is_empty());
        assert!(matches!(dict.pick_secret_word(&mut rng), Err(HangmanError::EmptyDictionary)));
    }

    #[test]
    fn test_pick_covers_every_word() {
        let dict: Dictionary = ["cat", "dog", "owl"].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(dict.pick_secret_word(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
