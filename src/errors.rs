use std::io;
use std::path::PathBuf;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures of the daily puzzle itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The word list has no entries. Nothing was provisioned.
    #[error("no words in the word list")]
    EmptyWordList,

    /// The computed ordinal has no backing word.
    #[error("word not found for today (index {index})")]
    WordNotFound { index: usize },

    /// The guess length differs from today's word.
    #[error("Guess must be {expected} letters")]
    LengthMismatch { expected: usize },
}

impl PuzzleError {
    /// Client errors are safe to retry with a corrected guess.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PuzzleError::LengthMismatch { .. })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for PuzzleError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

/// Failures while loading or provisioning the share directory.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed game config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    #[error("game already provisioned at {0} (use --reset to replace it)")]
    AlreadyProvisioned(PathBuf),

    #[error("no usable words in {0}")]
    NotEnoughWords(PathBuf),
}

impl From<StoreError> for io::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
