//! Error types for building JS object graphs.

use thiserror::Error;

/// Errors that can occur while assembling a [`JsObject`](crate::JsObject).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsError {
    /// The node was already rendered and no longer accepts entries.
    #[error("js object '{object}' is already finalized; cannot add '{entry}'")]
    AlreadyFinalized { object: String, entry: String },

    /// Only named nodes can be nested inside another node.
    #[error("js object '{parent}' cannot hold an unnamed child")]
    UnnamedChild { parent: String },
}

/// Result type alias for JS object operations.
pub type Result<T> = std::result::Result<T, JsError>;
