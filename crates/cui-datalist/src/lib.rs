//! Editable in-memory lists with per-row change tracking.
//!
//! An [`EditableDataList`] keeps the items it was loaded with as a pristine
//! baseline and exposes display rows ([`ItemWrapper`]) that carry an
//! [`EditStatus`] tag. Rows can be added, edited, saved, cancelled and marked
//! for deletion; the list computes which items were added, modified and
//! deleted.
//!
//! Item creation and behaviour hooks come from an [`ItemFactory`]. Any
//! `Default + Clone` item works with [`DefaultItems`].
//!
//! # Example
//!
//! ```
//! use cui_datalist::{EditStatus, EditableDataList};
//!
//! let mut list = EditableDataList::new(vec!["alpha".to_string(), "beta".to_string()]);
//! let id = list.display_items()[0].id();
//!
//! list.edit_item(id).unwrap();
//! *list.item_mut(id).unwrap() = "gamma".to_string();
//! list.save_edit_item(id).unwrap();
//!
//! assert_eq!(list.row(id).unwrap().status(), EditStatus::Modified);
//! assert!(list.has_changes());
//!
//! let changes = list.commit();
//! assert_eq!(changes.modified, vec!["gamma".to_string()]);
//! assert!(!list.has_changes());
//! ```

mod behavior;
mod error;
mod model;
mod status;
mod wrapper;

pub use behavior::{DefaultItems, ItemFactory};
pub use error::{DataListError, Result};
pub use model::{Changeset, DataListState, EditableDataList};
pub use status::{EditEvent, EditStatus, RowId};
pub use wrapper::ItemWrapper;
