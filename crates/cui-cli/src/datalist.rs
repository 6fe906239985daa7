//! Replays edit scripts against an [`EditableDataList`] of strings.

use anyhow::{Context, Result, anyhow};
use cui_datalist::{Changeset, EditEvent, EditStatus, EditableDataList, ItemFactory, RowId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One step of an edit script. Rows are addressed by display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DataListStep {
    /// Adds a row and leaves its edit open.
    Add {
        #[serde(default)]
        value: String,
    },
    /// Opens an edit on a row and replaces its value.
    Edit { row: usize, value: String },
    Save { row: usize },
    Cancel { row: usize },
    Delete { row: usize },
    Undo { row: usize },
    Commit,
    CancelAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataListScript {
    pub items: Vec<String>,
    pub steps: Vec<DataListStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowReport {
    pub id: RowId,
    pub value: String,
    pub status: EditStatus,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataListReport {
    pub rows: Vec<RowReport>,
    pub has_changes: bool,
    /// The last commit, if the script committed.
    pub changeset: Option<Changeset<String>>,
    pub events: Vec<String>,
}

/// String rows that log every change event.
#[derive(Debug, Default)]
struct LoggedStrings {
    events: Vec<String>,
}

impl ItemFactory<String> for LoggedStrings {
    fn create_empty_item(&self) -> String {
        String::new()
    }

    fn create_copy(&self, item: &String) -> String {
        item.clone()
    }

    fn element_modified(&mut self, event: EditEvent, old: Option<&String>, new: Option<&String>) {
        let line = match (old, new) {
            (Some(old), Some(new)) => format!("{event:?}: {old} -> {new}"),
            (Some(old), None) => format!("{event:?}: {old}"),
            (None, Some(new)) => format!("{event:?}: {new}"),
            (None, None) => format!("{event:?}"),
        };
        info!(event = ?event, "{line}");
        self.events.push(line);
    }
}

pub fn parse_script(json: &str) -> Result<DataListScript> {
    serde_json::from_str(json).context("parse data list script")
}

pub fn replay(script: &DataListScript) -> Result<DataListReport> {
    let mut list = EditableDataList::with_behavior(script.items.clone(), LoggedStrings::default());
    let mut changeset = None;

    for (index, step) in script.steps.iter().enumerate() {
        apply(&mut list, step, &mut changeset).with_context(|| format!("step {index}"))?;
        debug!(step = index, rows = list.display_items().len(), "replayed step");
    }

    let rows = list
        .display_items()
        .iter()
        .map(|row| RowReport {
            id: row.id(),
            value: row.item().clone(),
            status: row.status(),
            editing: row.is_editing(),
        })
        .collect();
    let has_changes = list.has_changes();
    let (_, behavior) = list.into_state();
    info!(steps = script.steps.len(), has_changes, "replayed data list script");
    Ok(DataListReport {
        rows,
        has_changes,
        changeset,
        events: behavior.events,
    })
}

fn apply(
    list: &mut EditableDataList<String, LoggedStrings>,
    step: &DataListStep,
    changeset: &mut Option<Changeset<String>>,
) -> Result<()> {
    match step {
        DataListStep::Add { value } => {
            let id = list.add_item();
            *list.item_mut(id)? = value.clone();
        }
        DataListStep::Edit { row, value } => {
            let id = row_id(list, *row)?;
            list.edit_item(id)?;
            *list.item_mut(id)? = value.clone();
        }
        DataListStep::Save { row } => {
            let id = row_id(list, *row)?;
            list.save_edit_item(id)?;
        }
        DataListStep::Cancel { row } => {
            let id = row_id(list, *row)?;
            list.cancel_edit_item(id)?;
        }
        DataListStep::Delete { row } => {
            let id = row_id(list, *row)?;
            list.mark_for_delete(id)?;
        }
        DataListStep::Undo { row } => {
            let id = row_id(list, *row)?;
            list.undo_mark_for_delete(id)?;
        }
        DataListStep::Commit => *changeset = Some(list.commit()),
        DataListStep::CancelAll => list.cancel_all(),
    }
    Ok(())
}

fn row_id(list: &EditableDataList<String, LoggedStrings>, row: usize) -> Result<RowId> {
    list.display_items()
        .get(row)
        .map(|wrapper| wrapper.id())
        .ok_or_else(|| anyhow!("row {row} out of range ({} rows)", list.display_items().len()))
}
