//! Round state for one secret word: what has been revealed and how many
//! wrong guesses have been spent.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct HangmanState {
    word: String,
    /// One slot per character of `word`; `None` is a blank still to guess.
    revealed: Vec<Option<char>>,
    wrong_count: usize,
    max_wrong: usize,
}

impl HangmanState {
    /// Characters that cannot be guessed (hyphens, apostrophes) start revealed.
    pub fn new(word: impl Into<String>, max_wrong: usize) -> Self {
        let word = word.into();
        let revealed = word
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { None } else { Some(c) })
            .collect();

        Self {
            word,
            revealed,
            wrong_count: 0,
            max_wrong,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    pub fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    pub fn contains(&self, letter: char) -> bool {
        self.word.chars().any(|c| c.eq_ignore_ascii_case(&letter))
    }

    /// Reveal every position holding `letter`. Does nothing if the letter
    /// is absent; callers route misses to `guess` instead.
    pub fn record_guess(&mut self, letter: char) {
        for (slot, c) in self.revealed.iter_mut().zip(self.word.chars()) {
            if c.eq_ignore_ascii_case(&letter) {
                *slot = Some(c);
            }
        }
    }

    /// Apply one guess. Repeated letters are not tracked: guessing a wrong
    /// letter twice costs two wrong guesses.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.contains(letter) {
            self.record_guess(letter);
            GuessOutcome::Hit
        } else {
            self.wrong_count = (self.wrong_count + 1).min(self.max_wrong);
            GuessOutcome::Miss
        }
    }

    pub fn is_win(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    pub fn is_lost(&self) -> bool {
        !self.is_win() && self.wrong_count >= self.max_wrong
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        if self.is_win() {
            Some(RoundOutcome::Won)
        } else if self.is_lost() {
            Some(RoundOutcome::Lost)
        } else {
            None
        }
    }
}
