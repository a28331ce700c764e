//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`.

use thiserror::Error;

/// The error type for `fs-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("particle code {0} is listed twice")]
    DuplicateParticle(i32),

    #[error("particle code {0} is not in the particle table")]
    UnknownParticle(i32),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `fs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
