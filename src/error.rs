use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid comments data: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Configuration(String),

    #[error("Claude API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Claude API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Empty Claude response")]
    EmptyResponse,

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No JSON files found in {}", .0.display())]
    NoInputFiles(PathBuf),
}

/// Reasons a comment collection is rejected before any model call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No comments provided")]
    NoComments,

    #[error("Comments must be a list")]
    NotAList,

    #[error("Comment {index} is not an object")]
    NotAnObject { index: usize },

    #[error("No comments have the '{field}' field")]
    MissingField { field: String },
}
