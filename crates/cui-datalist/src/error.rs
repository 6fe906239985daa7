//! Error types for data list operations.

use thiserror::Error;

use crate::status::RowId;

/// Errors that can occur when operating on rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataListError {
    #[error("row {0} not found")]
    RowNotFound(RowId),

    /// Rows marked for deletion must be restored before they can be edited.
    #[error("row {0} is marked for deletion and cannot be edited")]
    MarkedForDelete(RowId),

    #[error("row {0} is not being edited")]
    NotEditing(RowId),

    #[error("row {0} is read-only")]
    ReadOnly(RowId),

    #[error("row {0} cannot be deleted")]
    NotDeletable(RowId),

    #[error("restored state holds row {0} more than once")]
    DuplicateRowId(RowId),

    #[error("restored row {row} was never issued (next id is {next_id})")]
    RowIdNotIssued { row: RowId, next_id: u64 },
}

/// Result type alias for data list operations.
pub type Result<T> = std::result::Result<T, DataListError>;
