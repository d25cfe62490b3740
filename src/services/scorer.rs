use std::collections::HashMap;

use crate::errors::PuzzleError;
use crate::models::{CheckResult, LetterFeedback, LetterStatus};

/// Score `guess` against `target`, case-insensitively.
///
/// Exact matches are reserved first; only the target letters left over are
/// handed out as `Present`, left to right. A letter is therefore never
/// credited more times than it occurs in the target.
///
/// Characters are not validated; any same-length input is scored as-is.
pub fn score_guess(guess: &str, target: &str) -> Result<CheckResult, PuzzleError> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

    if guess.len() != target.len() {
        return Err(PuzzleError::LengthMismatch { expected: target.len() });
    }

    let mut feedback = vec![LetterFeedback::Absent; guess.len()];
    let mut remaining: HashMap<char, usize> = HashMap::new();

    // Pass 1: exact matches
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            feedback[i] = LetterFeedback::Correct;
        } else {
            *remaining.entry(t).or_insert(0) += 1;
        }
    }

    // Pass 2: displaced matches from what is left
    for (i, &g) in guess.iter().enumerate() {
        if feedback[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g) {
            if *count > 0 {
                feedback[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }
    }

    let solved = feedback.iter().all(|&f| f == LetterFeedback::Correct);
    let result = guess
        .into_iter()
        .zip(feedback)
        .map(|(letter, status)| LetterStatus { letter, status })
        .collect();

    Ok(CheckResult { result, solved })
}
