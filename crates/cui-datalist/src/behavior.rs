//! Item creation and the behaviour hooks of a list.

use crate::status::EditEvent;

/// Creates items for a list and customises its behaviour.
///
/// Only the two constructors are required; every hook has a neutral default.
pub trait ItemFactory<T> {
    /// A blank item for a newly added row.
    fn create_empty_item(&self) -> T;

    /// A detached copy edited in place of the original.
    fn create_copy(&self, item: &T) -> T;

    /// Called after a change was applied. `old` is `None` for additions and
    /// `new` is `None` for deletions.
    fn element_modified(&mut self, _event: EditEvent, _old: Option<&T>, _new: Option<&T>) {}

    /// Whether new rows go to the top of the list instead of the bottom.
    fn new_items_first(&self) -> bool {
        false
    }

    fn is_read_only(&self, _item: &T) -> bool {
        false
    }

    fn is_deletable(&self, _item: &T) -> bool {
        true
    }
}

/// Factory for items that are `Default + Clone`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultItems;

impl<T: Default + Clone> ItemFactory<T> for DefaultItems {
    fn create_empty_item(&self) -> T {
        T::default()
    }

    fn create_copy(&self, item: &T) -> T {
        item.clone()
    }
}
