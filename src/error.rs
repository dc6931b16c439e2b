//! Error types for the board-game ranking loader

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Malformed ranking filename: {path}")]
    MalformedFilename { path: PathBuf },
}
