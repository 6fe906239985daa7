//! Property tests: random operation sequences keep the list consistent.

use cui_datalist::{EditStatus, EditableDataList, RowId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add,
    Edit(usize, u8),
    Save(usize),
    Cancel(usize),
    Delete(usize),
    Undo(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0..8usize, any::<u8>()).prop_map(|(i, v)| Op::Edit(i, v)),
        (0..8usize).prop_map(Op::Save),
        (0..8usize).prop_map(Op::Cancel),
        (0..8usize).prop_map(Op::Delete),
        (0..8usize).prop_map(Op::Undo),
    ]
}

fn pick(list: &EditableDataList<u8>, index: usize) -> Option<RowId> {
    let rows = list.display_items();
    (!rows.is_empty()).then(|| rows[index % rows.len()].id())
}

fn apply(list: &mut EditableDataList<u8>, op: &Op) {
    match *op {
        Op::Add => {
            list.add_item();
        }
        Op::Edit(index, value) => {
            if let Some(id) = pick(list, index)
                && list.edit_item(id).is_ok()
            {
                *list.item_mut(id).unwrap() = value;
            }
        }
        Op::Save(index) => {
            if let Some(id) = pick(list, index) {
                list.save_edit_item(id).unwrap();
            }
        }
        Op::Cancel(index) => {
            if let Some(id) = pick(list, index) {
                list.cancel_edit_item(id).unwrap();
            }
        }
        Op::Delete(index) => {
            if let Some(id) = pick(list, index) {
                list.mark_for_delete(id).unwrap();
            }
        }
        Op::Undo(index) => {
            if let Some(id) = pick(list, index) {
                list.undo_mark_for_delete(id).unwrap();
            }
        }
    }
}

proptest! {
    #[test]
    fn at_most_one_row_is_under_edit(
        items in prop::collection::vec(any::<u8>(), 0..6),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut list = EditableDataList::new(items);
        for op in &ops {
            apply(&mut list, op);
            let editing = list.display_items().iter().filter(|row| row.is_editing()).count();
            prop_assert!(editing <= 1);
            prop_assert_eq!(editing == 0, list.is_every_item_saved_or_canceled());
        }
    }

    #[test]
    fn has_changes_matches_row_tags(
        items in prop::collection::vec(any::<u8>(), 0..6),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut list = EditableDataList::new(items);
        for op in &ops {
            apply(&mut list, op);
            let tagged = list
                .display_items()
                .iter()
                .any(|row| row.status() != EditStatus::Unchanged);
            prop_assert_eq!(list.has_changes(), tagged || !list.deleted_items().is_empty());
        }
    }

    #[test]
    fn result_and_deleted_partition_the_rows(
        items in prop::collection::vec(any::<u8>(), 0..6),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut list = EditableDataList::new(items);
        for op in &ops {
            apply(&mut list, op);
        }
        let rows = list.display_items().len();
        prop_assert_eq!(list.result_items().len() + list.deleted_items().len(), rows);
        prop_assert!(
            list.display_items()
                .iter()
                .filter(|row| row.is_added())
                .all(|row| row.status() == EditStatus::Added)
        );
    }

    #[test]
    fn cancel_all_discards_everything(
        items in prop::collection::vec(any::<u8>(), 0..6),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut list = EditableDataList::new(items.clone());
        for op in &ops {
            apply(&mut list, op);
        }
        list.cancel_all();
        prop_assert!(!list.has_changes());
        let values: Vec<u8> = list.display_items().iter().map(|row| *row.item()).collect();
        prop_assert_eq!(values, items);
    }

    #[test]
    fn commit_result_becomes_baseline(
        items in prop::collection::vec(any::<u8>(), 0..6),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut list = EditableDataList::new(items);
        for op in &ops {
            apply(&mut list, op);
        }
        let changes = list.commit();
        prop_assert!(!list.has_changes());
        prop_assert_eq!(list.loaded_items(), changes.result.as_slice());
    }
}
