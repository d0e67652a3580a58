use thiserror::Error;

use crate::RecordId;

/// A row limit outside of [`crate::Limit::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("Unsupported row limit: {0}")]
    Unsupported(usize),
}

/// Failure to turn a JSON value into a [`crate::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Record is not a JSON object")]
    NotAnObject,
    #[error("Record has no `id` field")]
    MissingId,
    #[error("Record `id` is not an integer: {0}")]
    InvalidId(String),
    #[error("Field `{field}` is neither a string nor a number")]
    UnsupportedField { field: String },
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),
}

/// Failure of the one-shot users fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] serde_env::Error),
}
