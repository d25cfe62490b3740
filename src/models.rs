use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::clock::Clock;
use crate::services::puzzle::DailyPuzzle;

/// Application state shared across all handlers
pub struct AppState {
    pub puzzle: DailyPuzzle,
    pub clock: Box<dyn Clock>,
}

/// Ordered word list; a word's position is its ordinal index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// ASCII-uppercases every entry and drops blank ones, keeping order.
    /// Uses the same folding as the scorer.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        WordList { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Settings fixed when a word list is provisioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub start_date: NaiveDate,
    pub topic: String,
    pub max_word_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterFeedback {
    /// Right letter, right position
    Correct,
    /// In the word, elsewhere
    Present,
    /// Not in the word, or every occurrence already credited
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterStatus {
    pub letter: char,
    pub status: LetterFeedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub result: Vec<LetterStatus>,
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleInfo {
    pub word_length: usize,
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_normalizes_entries() {
        let words = WordList::new(["comet", "  ", " Nebula ", ""]);
        assert_eq!(words.len(), 2);
        assert_eq!(words.get(0), Some("COMET"));
        assert_eq!(words.get(1), Some("NEBULA"));
        assert_eq!(words.get(2), None);
    }

    #[test]
    fn test_feedback_serializes_lowercase() {
        let status = LetterStatus { letter: 'E', status: LetterFeedback::Present };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json, serde_json::json!({ "letter": "E", "status": "present" }));
    }

    #[test]
    fn test_puzzle_info_uses_camel_case() {
        let info = PuzzleInfo { word_length: 7, topic: "Space".to_string() };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({ "wordLength": 7, "topic": "Space" }));
    }

    #[test]
    fn test_game_config_date_format() {
        let config: GameConfig = serde_json::from_str(
            r#"{"start_date":"2026-10-17","topic":"Fruits","max_word_length":8}"#,
        )
        .unwrap();
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        assert_eq!(config.max_word_length, 8);
    }
}
