use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::errors::StoreError;
use crate::models::{GameConfig, WordList};
use crate::services::puzzle::DailyPuzzle;

pub const WORDS_FILE: &str = "words.txt";
pub const CONFIG_FILE: &str = "game.json";

pub fn words_path(share_dir: &Path) -> PathBuf {
    share_dir.join(WORDS_FILE)
}

pub fn config_path(share_dir: &Path) -> PathBuf {
    share_dir.join(CONFIG_FILE)
}

/// Load words from a plain text file (one word per line).
/// Line order is the ordinal index; blank lines are skipped.
pub fn load_words(file_path: &Path) -> io::Result<WordList> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(WordList::new(lines))
}

pub fn save_words(file_path: &Path, words: &WordList) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(file_path)?);
    for word in words.iter() {
        writeln!(out, "{}", word)?;
    }
    out.flush()
}

pub fn load_game_config(file_path: &Path) -> Result<GameConfig, StoreError> {
    let raw = fs::read_to_string(file_path)?;
    let config: GameConfig = serde_json::from_str(&raw)?;
    Ok(config)
}

pub fn save_game_config(file_path: &Path, config: &GameConfig) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(file_path, json)?;
    Ok(())
}

/// Load the provisioned game from a share directory.
///
/// The config is required. A missing or empty word list is only warned
/// about: the service still starts and every puzzle request reports it.
/// Any other failure to read the word list is an error.
pub fn load_puzzle(share_dir: &Path) -> Result<DailyPuzzle, StoreError> {
    let cfg_path = config_path(share_dir);
    let config = load_game_config(&cfg_path)?;
    info!(
        "Loaded game config from {}: topic '{}', started {}",
        cfg_path.display(),
        config.topic,
        config.start_date
    );

    let list_path = words_path(share_dir);
    let words = match load_words(&list_path) {
        Ok(words) => words,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("No word list at {}.", list_path.display());
            WordList::default()
        }
        Err(e) => return Err(e.into()),
    };

    if words.is_empty() {
        warn!("Word list at {} is empty; puzzles cannot be served.", list_path.display());
    } else {
        info!("Total words in rotation: {}", words.len());
    }

    Ok(DailyPuzzle::new(words, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_config() -> GameConfig {
        GameConfig {
            start_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            topic: "Animals".to_string(),
            max_word_length: 7,
        }
    }

    #[test]
    fn test_load_words_keeps_order_and_skips_blanks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(WORDS_FILE);
        fs::write(&path, "zebra\n\n  Otter \nBADGER\n").unwrap();

        let words = load_words(&path).unwrap();
        let loaded: Vec<&str> = words.iter().collect();
        assert_eq!(loaded, vec!["ZEBRA", "OTTER", "BADGER"]);
    }

    #[test]
    fn test_words_survive_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(WORDS_FILE);
        let words = WordList::new(["HORSE", "MOOSE", "WALRUS"]);

        save_words(&path, &words).unwrap();
        assert_eq!(load_words(&path).unwrap(), words);
    }

    #[test]
    fn test_game_config_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        save_game_config(&path, &sample_config()).unwrap();
        assert_eq!(load_game_config(&path).unwrap(), sample_config());
    }

    #[test]
    fn test_malformed_config_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ \"topic\": ").unwrap();

        assert!(matches!(load_game_config(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_load_puzzle_requires_config() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(load_puzzle(dir.path()), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_load_puzzle_rejects_unreadable_word_list() {
        let dir = TempDir::new().unwrap();
        save_game_config(&config_path(dir.path()), &sample_config()).unwrap();
        fs::write(words_path(dir.path()), [0x5a, 0xff, 0xfe, 0x0a]).unwrap();

        assert!(matches!(load_puzzle(dir.path()), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_load_puzzle_without_words_serves_empty_list() {
        let dir = TempDir::new().unwrap();
        save_game_config(&config_path(dir.path()), &sample_config()).unwrap();

        let puzzle = load_puzzle(dir.path()).unwrap();
        assert!(puzzle.words().is_empty());
        assert_eq!(puzzle.config(), &sample_config());
    }
}
