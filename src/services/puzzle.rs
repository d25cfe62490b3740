use chrono::NaiveDate;

use crate::errors::PuzzleError;
use crate::models::{CheckResult, GameConfig, PuzzleInfo, WordList};
use crate::services::calendar::word_of_the_day;
use crate::services::scorer::score_guess;

/// A provisioned game: the word list plus the config it was created with.
/// Read-only once loaded.
#[derive(Debug, Clone)]
pub struct DailyPuzzle {
    words: WordList,
    config: GameConfig,
}

impl DailyPuzzle {
    pub fn new(words: WordList, config: GameConfig) -> Self {
        DailyPuzzle { words, config }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn word_for(&self, today: NaiveDate) -> Result<&str, PuzzleError> {
        word_of_the_day(&self.words, self.config.start_date, today)
    }

    /// Public facts about today's puzzle.
    pub fn info(&self, today: NaiveDate) -> Result<PuzzleInfo, PuzzleError> {
        let word = self.word_for(today)?;
        Ok(PuzzleInfo {
            word_length: word.chars().count(),
            topic: self.config.topic.clone(),
        })
    }

    pub fn check(&self, today: NaiveDate, guess: &str) -> Result<CheckResult, PuzzleError> {
        let target = self.word_for(today)?;
        score_guess(guess, target)
    }
}
