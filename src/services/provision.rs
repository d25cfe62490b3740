use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::StoreError;
use crate::models::{GameConfig, WordList};
use crate::services::word_loader::{config_path, save_game_config, save_words, words_path};

pub const MIN_WORD_LENGTH: usize = 5;
pub const MAX_WORD_LENGTH_LIMIT: usize = 10;
/// Below this many words the rotation repeats within two months.
pub const LOW_WORD_COUNT: usize = 50;

pub struct ProvisionRequest {
    pub share_dir: PathBuf,
    pub source: PathBuf,
    pub topic: String,
    pub max_length: usize,
    pub reset: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProvisionSummary {
    pub word_count: usize,
    pub start_date: NaiveDate,
}

/// Keep ASCII alphabetic words of `MIN_WORD_LENGTH..=max_length` letters,
/// uppercased, first occurrence wins.
pub fn filter_candidates<'a, I>(raw: I, max_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|w| w.trim().to_ascii_uppercase())
        .filter(|w| {
            (MIN_WORD_LENGTH..=max_length).contains(&w.len())
                && w.chars().all(|c| c.is_ascii_alphabetic())
        })
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

fn read_source(path: &Path) -> io::Result<Vec<String>> {
    let file = fs::File::open(path)?;
    io::BufReader::new(file).lines().collect()
}

fn validate(request: &ProvisionRequest) -> Result<(), StoreError> {
    if request.topic.trim().is_empty() {
        return Err(StoreError::InvalidConfig("topic cannot be empty".to_string()));
    }
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH_LIMIT).contains(&request.max_length) {
        return Err(StoreError::InvalidConfig(format!(
            "max word length must be between {} and {}, got {}",
            MIN_WORD_LENGTH, MAX_WORD_LENGTH_LIMIT, request.max_length
        )));
    }
    Ok(())
}

fn check_existing(share_dir: &Path, reset: bool) -> Result<(), StoreError> {
    for path in [words_path(share_dir), config_path(share_dir)] {
        if !path.exists() {
            continue;
        }
        if !reset {
            return Err(StoreError::AlreadyProvisioned(path));
        }
        info!("Replacing {}", path.display());
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("new")
}

/// Replace the share directory's word list and game config.
/// The new rotation starts on `today`.
pub fn provision<R: Rng + ?Sized>(
    request: &ProvisionRequest,
    today: NaiveDate,
    rng: &mut R,
) -> Result<ProvisionSummary, StoreError> {
    validate(request)?;
    check_existing(&request.share_dir, request.reset)?;

    let raw = read_source(&request.source)?;
    let mut words = filter_candidates(raw.iter().map(String::as_str), request.max_length);
    if words.is_empty() {
        return Err(StoreError::NotEnoughWords(request.source.clone()));
    }
    info!(
        "Accepted {} of {} candidate words for '{}'",
        words.len(),
        raw.len(),
        request.topic
    );
    if words.len() < LOW_WORD_COUNT {
        warn!(
            "Only {} words available; consider a broader source list.",
            words.len()
        );
    }

    words.shuffle(rng);

    // Both files are written in full before either replaces the live game.
    fs::create_dir_all(&request.share_dir)?;
    let list = WordList::new(words);
    let list_path = words_path(&request.share_dir);
    save_words(&staging_path(&list_path), &list)?;

    let config = GameConfig {
        start_date: today,
        topic: request.topic.trim().to_string(),
        max_word_length: request.max_length,
    };
    let cfg_path = config_path(&request.share_dir);
    save_game_config(&staging_path(&cfg_path), &config)?;

    fs::rename(staging_path(&list_path), &list_path)?;
    fs::rename(staging_path(&cfg_path), &cfg_path)?;

    info!(
        "Provisioned {} words in {}, starting {}",
        list.len(),
        request.share_dir.display(),
        today
    );

    Ok(ProvisionSummary {
        word_count: list.len(),
        start_date: today,
    })
}
