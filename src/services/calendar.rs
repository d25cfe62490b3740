use chrono::NaiveDate;

use crate::errors::PuzzleError;
use crate::models::WordList;

/// Whole days from `start` to `today`; negative before the start date.
pub fn elapsed_days(start: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(start).num_days()
}

/// Euclidean position of a day within a list of `len` words.
pub fn word_index(elapsed_days: i64, len: usize) -> Result<usize, PuzzleError> {
    if len == 0 {
        return Err(PuzzleError::EmptyWordList);
    }
    // rem_euclid keeps the result in [0, len) for negative day counts too
    Ok(elapsed_days.rem_euclid(len as i64) as usize)
}

/// Pick the word for `today`. The sequence repeats every `words.len()` days.
pub fn word_of_the_day<'a>(
    words: &'a WordList,
    start: NaiveDate,
    today: NaiveDate,
) -> Result<&'a str, PuzzleError> {
    let index = word_index(elapsed_days(start, today), words.len())?;
    words.get(index).ok_or(PuzzleError::WordNotFound { index })
}
