//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating a run configuration or building the
/// sampling distributions it names.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid distribution parameters: {0}")]
    Distribution(String),
}

/// Shorthand result type for `qs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
