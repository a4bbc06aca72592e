//! Codegen error types

use thiserror::Error;

/// Errors surfaced at the public generator boundary.
///
/// Invalid option values and malformed body modes never reach this type;
/// they degrade to defaults during sanitization, so generation itself
/// cannot fail for well-typed input. The variants here cover what remains
/// fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScribeError {
    /// The requested target dialect does not exist.
    #[error("unknown target: {0}")]
    UnknownTarget(String),
}

/// Result type alias for generator operations.
pub type ScribeResult<T> = Result<T, ScribeError>;
