//! Row identity, edit-state tags and change events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a display row.
///
/// Ids are never reused within one list, so a stale id fails with
/// `RowNotFound` instead of hitting a different row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Edit-state tag of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditStatus {
    /// As loaded.
    #[default]
    Unchanged,
    Added,
    Modified,
    MarkedForDelete,
}

impl EditStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Modified => "modified",
            Self::MarkedForDelete => "marked_for_delete",
        }
    }
}

impl fmt::Display for EditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change reported to [`ItemFactory::element_modified`](crate::ItemFactory::element_modified).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditEvent {
    /// A new row was saved for the first time.
    Added,
    /// A saved edit changed the value.
    Modified,
    MarkDelete,
    UnmarkDelete,
}
