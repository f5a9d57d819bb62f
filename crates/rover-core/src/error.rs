//! Base error type.
//!
//! Sub-crates define their own error enums (`GridError`, `NavError`) and
//! wrap `CoreError` where a core parse can fail underneath them.

use thiserror::Error;

/// Errors produced by `rover-core` parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rover-core`.
pub type CoreResult<T> = Result<T, CoreError>;
