//! Error types for history configuration.

use thiserror::Error;

use crate::config::{MAX_HISTORY_DEPTH, MIN_HISTORY_DEPTH};

/// Errors raised while building history values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error(
        "history depth must be between {min} and {max}, but was {0}",
        min = MIN_HISTORY_DEPTH,
        max = MAX_HISTORY_DEPTH
    )]
    InvalidDepth(usize),

    #[error("no fallback view configured")]
    MissingFallback,

    #[error("view id must not be empty")]
    EmptyViewId,

    #[error("reload token capacity must be at least 1")]
    InvalidTokenCapacity,
}

/// Result type alias for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
