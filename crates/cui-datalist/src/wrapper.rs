//! A display row: item plus edit bookkeeping.

use serde::{Deserialize, Serialize};

use crate::status::{EditStatus, RowId};

/// Where a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Origin {
    Loaded,
    Added,
}

/// An open edit. `original` is `None` for a row added and never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EditSession<T> {
    pub(crate) original: Option<T>,
}

/// One row of the list as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWrapper<T> {
    id: RowId,
    item: T,
    status: EditStatus,
    origin: Origin,
    #[serde(default = "no_edit")]
    edit: Option<EditSession<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_before_delete: Option<EditStatus>,
}

// `#[serde(default)]` here would add a `T: Default` bound.
fn no_edit<T>() -> Option<EditSession<T>> {
    None
}

impl<T> ItemWrapper<T> {
    pub(crate) fn loaded(id: RowId, item: T) -> Self {
        Self {
            id,
            item,
            status: EditStatus::Unchanged,
            origin: Origin::Loaded,
            edit: None,
            status_before_delete: None,
        }
    }

    pub(crate) fn added(id: RowId, item: T) -> Self {
        Self {
            id,
            item,
            status: EditStatus::Added,
            origin: Origin::Added,
            edit: None,
            status_before_delete: None,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// The current value; the working copy while an edit is open.
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn status(&self) -> EditStatus {
        self.status
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn is_marked_for_delete(&self) -> bool {
        self.status == EditStatus::MarkedForDelete
    }

    /// Added in this session rather than loaded.
    pub fn is_added(&self) -> bool {
        self.origin == Origin::Added
    }

    pub fn is_modified(&self) -> bool {
        self.status == EditStatus::Modified
    }

    /// Added and never saved: cancelling its edit drops the row.
    pub fn is_unsaved_new(&self) -> bool {
        self.edit.as_ref().is_some_and(|edit| edit.original.is_none())
    }

    pub(crate) fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    pub(crate) fn set_status(&mut self, status: EditStatus) {
        self.status = status;
    }

    pub(crate) fn open_edit(&mut self, working_copy: T) {
        let original = std::mem::replace(&mut self.item, working_copy);
        self.edit = Some(EditSession {
            original: Some(original),
        });
    }

    pub(crate) fn open_new_edit(&mut self) {
        self.edit = Some(EditSession { original: None });
    }

    pub(crate) fn take_edit(&mut self) -> Option<EditSession<T>> {
        self.edit.take()
    }

    pub(crate) fn mark_for_delete(&mut self) {
        self.status_before_delete = Some(self.status);
        self.status = EditStatus::MarkedForDelete;
    }

    pub(crate) fn undo_mark_for_delete(&mut self) {
        self.status = self
            .status_before_delete
            .take()
            .unwrap_or(EditStatus::Unchanged);
    }

    pub(crate) fn into_item(self) -> T {
        self.item
    }
}
