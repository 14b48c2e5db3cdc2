//! Error types for briefing generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the generation pipeline.
///
/// Only a missing template aborts a run; a missing or unparsable data
/// document is absorbed by the sample-document fallback and never appears
/// here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
