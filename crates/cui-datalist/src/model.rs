//! The editable list model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::behavior::{DefaultItems, ItemFactory};
use crate::error::{DataListError, Result};
use crate::status::{EditEvent, EditStatus, RowId};
use crate::wrapper::ItemWrapper;

/// Outcome of [`EditableDataList::commit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changeset<T> {
    pub added: Vec<T>,
    pub modified: Vec<T>,
    pub deleted: Vec<T>,
    /// Every row not marked for deletion, in display order.
    pub result: Vec<T>,
}

impl<T> Changeset<T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }
}

/// Persistable state of a list, without its behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataListState<T> {
    pub loaded: Vec<T>,
    pub rows: Vec<ItemWrapper<T>>,
    pub next_id: u64,
}

/// An in-memory list with per-row add / edit / delete tracking.
///
/// At most one row is under edit at a time: opening an edit cancels every
/// other open edit.
#[derive(Debug)]
pub struct EditableDataList<T, B = DefaultItems> {
    behavior: B,
    loaded: Vec<T>,
    rows: Vec<ItemWrapper<T>>,
    next_id: u64,
}

impl<T: Default + Clone> EditableDataList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_behavior(items, DefaultItems)
    }
}

impl<T, B: ItemFactory<T>> EditableDataList<T, B> {
    pub fn with_behavior(items: Vec<T>, behavior: B) -> Self {
        let mut list = Self {
            behavior,
            loaded: items,
            rows: Vec::new(),
            next_id: 0,
        };
        list.init_display_items();
        list
    }

    /// Rebuilds a list from persisted state.
    ///
    /// Every row id must be unique and below `next_id`, so ids handed out
    /// later stay fresh.
    pub fn from_state(state: DataListState<T>, behavior: B) -> Result<Self> {
        let mut seen = HashSet::with_capacity(state.rows.len());
        for row in &state.rows {
            let id = row.id();
            if !seen.insert(id) {
                return Err(DataListError::DuplicateRowId(id));
            }
            if id.value() >= state.next_id {
                return Err(DataListError::RowIdNotIssued {
                    row: id,
                    next_id: state.next_id,
                });
            }
        }
        debug!(rows = state.rows.len(), next_id = state.next_id, "restored data list");
        Ok(Self {
            behavior,
            loaded: state.loaded,
            rows: state.rows,
            next_id: state.next_id,
        })
    }

    pub fn into_state(self) -> (DataListState<T>, B) {
        let state = DataListState {
            loaded: self.loaded,
            rows: self.rows,
            next_id: self.next_id,
        };
        (state, self.behavior)
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// The baseline the list was loaded with (or last committed).
    pub fn loaded_items(&self) -> &[T] {
        &self.loaded
    }

    pub fn display_items(&self) -> &[ItemWrapper<T>] {
        &self.rows
    }

    /// Loaded rows currently marked for deletion.
    pub fn deleted_items(&self) -> Vec<&T> {
        self.rows
            .iter()
            .filter(|row| row.is_marked_for_delete() && !row.is_added())
            .map(ItemWrapper::item)
            .collect()
    }

    /// Every row not marked for deletion.
    pub fn result_items(&self) -> Vec<&T> {
        self.rows
            .iter()
            .filter(|row| !row.is_marked_for_delete())
            .map(ItemWrapper::item)
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.status() != EditStatus::Unchanged)
            || !self.deleted_items().is_empty()
    }

    pub fn is_every_item_saved_or_canceled(&self) -> bool {
        !self.rows.iter().any(ItemWrapper::is_editing)
    }

    pub fn row(&self, id: RowId) -> Result<&ItemWrapper<T>> {
        self.rows
            .iter()
            .find(|row| row.id() == id)
            .ok_or(DataListError::RowNotFound(id))
    }

    /// The working copy of a row under edit.
    pub fn item_mut(&mut self, id: RowId) -> Result<&mut T> {
        let index = self.index_of(id)?;
        let row = &mut self.rows[index];
        if !row.is_editing() {
            return Err(DataListError::NotEditing(id));
        }
        Ok(row.item_mut())
    }

    /// Adds a blank row and opens an edit on it.
    pub fn add_item(&mut self) -> RowId {
        self.cancel_all_edits();
        let id = self.next_row_id();
        let mut row = ItemWrapper::added(id, self.behavior.create_empty_item());
        row.open_new_edit();
        self.insert_row(row);
        debug!(row = %id, "added row");
        id
    }

    /// Adds a ready item as an added row without opening an edit.
    pub fn add_existing(&mut self, item: T) -> RowId {
        let id = self.next_row_id();
        self.insert_row(ItemWrapper::added(id, item));
        debug!(row = %id, "added existing item");
        id
    }

    /// Opens an edit on a row, cancelling any other open edit.
    pub fn edit_item(&mut self, id: RowId) -> Result<()> {
        let index = self.index_of(id)?;
        let row = &self.rows[index];
        if row.is_editing() {
            trace!(row = %id, "row already under edit");
            return Ok(());
        }
        if row.is_marked_for_delete() {
            return Err(DataListError::MarkedForDelete(id));
        }
        if self.behavior.is_read_only(row.item()) {
            return Err(DataListError::ReadOnly(id));
        }
        self.cancel_all_edits();
        // Cancelling may have dropped unsaved rows above this one.
        let index = self.index_of(id)?;
        let working_copy = self.behavior.create_copy(self.rows[index].item());
        self.rows[index].open_edit(working_copy);
        debug!(row = %id, "opened edit");
        Ok(())
    }

    /// Discards the open edit. A new row that was never saved is removed.
    pub fn cancel_edit_item(&mut self, id: RowId) -> Result<()> {
        let index = self.index_of(id)?;
        let Some(session) = self.rows[index].take_edit() else {
            warn!(row = %id, "cancel requested for a row that is not being edited");
            return Ok(());
        };
        match session.original {
            Some(original) => {
                *self.rows[index].item_mut() = original;
                debug!(row = %id, "cancelled edit");
            }
            None => {
                self.rows.remove(index);
                debug!(row = %id, "dropped unsaved new row");
            }
        }
        Ok(())
    }

    /// Keeps the working copy. An unchanged row becomes modified when the
    /// value differs from before the edit.
    pub fn save_edit_item(&mut self, id: RowId) -> Result<()>
    where
        T: PartialEq,
    {
        let index = self.index_of(id)?;
        let row = &mut self.rows[index];
        let Some(session) = row.take_edit() else {
            warn!(row = %id, "save requested for a row that is not being edited");
            return Ok(());
        };
        match session.original {
            None => {
                self.behavior
                    .element_modified(EditEvent::Added, None, Some(row.item()));
                debug!(row = %id, "saved new row");
            }
            Some(original) if original != *row.item() => {
                if row.status() == EditStatus::Unchanged {
                    row.set_status(EditStatus::Modified);
                }
                self.behavior.element_modified(
                    EditEvent::Modified,
                    Some(&original),
                    Some(row.item()),
                );
                debug!(row = %id, status = %row.status(), "saved modified row");
            }
            Some(_) => trace!(row = %id, "saved edit without changes"),
        }
        Ok(())
    }

    /// Marks a loaded row for deletion; an added row is removed outright.
    pub fn mark_for_delete(&mut self, id: RowId) -> Result<()> {
        let index = self.index_of(id)?;
        if self.rows[index].is_marked_for_delete() {
            trace!(row = %id, "row already marked for deletion");
            return Ok(());
        }
        if !self.behavior.is_deletable(self.rows[index].item()) {
            return Err(DataListError::NotDeletable(id));
        }
        if self.rows[index].is_added() {
            let removed = self.rows.remove(index).into_item();
            self.behavior
                .element_modified(EditEvent::MarkDelete, Some(&removed), None);
            debug!(row = %id, "removed added row");
            return Ok(());
        }
        if self.rows[index].is_editing() {
            self.cancel_edit_item(id)?;
        }
        let row = &mut self.rows[index];
        row.mark_for_delete();
        self.behavior
            .element_modified(EditEvent::MarkDelete, Some(row.item()), None);
        debug!(row = %id, "marked row for deletion");
        Ok(())
    }

    /// Restores the tag the row had before it was marked.
    pub fn undo_mark_for_delete(&mut self, id: RowId) -> Result<()> {
        let index = self.index_of(id)?;
        let row = &mut self.rows[index];
        if !row.is_marked_for_delete() {
            warn!(row = %id, "undo requested for a row that is not marked for deletion");
            return Ok(());
        }
        row.undo_mark_for_delete();
        self.behavior
            .element_modified(EditEvent::UnmarkDelete, None, Some(row.item()));
        debug!(row = %id, status = %row.status(), "restored row");
        Ok(())
    }

    /// Save-all: closes open edits and makes the result the new baseline.
    pub fn commit(&mut self) -> Changeset<T>
    where
        T: PartialEq,
    {
        let open: Vec<RowId> = self
            .rows
            .iter()
            .filter(|row| row.is_editing())
            .map(ItemWrapper::id)
            .collect();
        for id in open {
            // Ids were just read from the rows.
            let _ = self.save_edit_item(id);
        }

        let copy = |item: &T| self.behavior.create_copy(item);
        let changeset = Changeset {
            added: self
                .rows
                .iter()
                .filter(|row| row.is_added() && !row.is_marked_for_delete())
                .map(|row| copy(row.item()))
                .collect(),
            modified: self
                .rows
                .iter()
                .filter(|row| row.is_modified())
                .map(|row| copy(row.item()))
                .collect(),
            deleted: self.deleted_items().into_iter().map(copy).collect(),
            result: self.result_items().into_iter().map(copy).collect(),
        };
        debug!(
            added = changeset.added.len(),
            modified = changeset.modified.len(),
            deleted = changeset.deleted.len(),
            "committed data list"
        );
        self.loaded = changeset.result.iter().map(copy).collect();
        self.init_display_items();
        changeset
    }

    /// Cancel-all: rebuilds the rows from the baseline.
    pub fn cancel_all(&mut self) {
        debug!(rows = self.rows.len(), "cancelling all changes");
        self.init_display_items();
    }

    fn init_display_items(&mut self) {
        let mut rows = Vec::with_capacity(self.loaded.len());
        for item in &self.loaded {
            let id = RowId::new(self.next_id);
            self.next_id += 1;
            rows.push(ItemWrapper::loaded(id, self.behavior.create_copy(item)));
        }
        self.rows = rows;
    }

    fn cancel_all_edits(&mut self) {
        let open: Vec<RowId> = self
            .rows
            .iter()
            .filter(|row| row.is_editing())
            .map(ItemWrapper::id)
            .collect();
        for id in open {
            let _ = self.cancel_edit_item(id);
        }
    }

    fn insert_row(&mut self, row: ItemWrapper<T>) {
        if self.behavior.new_items_first() {
            self.rows.insert(0, row);
        } else {
            self.rows.push(row);
        }
    }

    fn next_row_id(&mut self) -> RowId {
        let id = RowId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: RowId) -> Result<usize> {
        self.rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or(DataListError::RowNotFound(id))
    }
}
