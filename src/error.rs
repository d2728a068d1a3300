//! Shared error types.

use std::io;

/// Errors raised while loading artifacts, encoding input, or rendering.
#[derive(Debug, thiserror::Error)]
pub enum SkillcastError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("artifact decode error: {0}")]
    Decode(#[from] bincode::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("encoder input is missing field {0:?}")]
    MissingField(String),

    #[error("unknown category {value:?} for field {field:?}")]
    UnknownCategory { field: String, value: String },

    #[error("schema mismatch: {0}")]
    Schema(String),

    #[error("invalid model artifact: {0}")]
    Model(String),

    #[error("feature row has {got} columns, model expects {expected}")]
    FeatureLength { expected: usize, got: usize },

    #[error("chart rendering failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, SkillcastError>;
