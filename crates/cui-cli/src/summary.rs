use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cui_cli::chart::RenderedChart;
use cui_cli::datalist::DataListReport;
use cui_cli::history::HistoryReport;
use cui_datalist::EditStatus;

pub fn print_chart(chart: &RenderedChart, script_only: bool) {
    println!("{}", chart.script);
    if script_only {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Plugin")]);
    apply_table_style(&mut table);
    if chart.plugins.is_empty() {
        table.add_row(vec![dim_cell("none")]);
    }
    for plugin in &chart.plugins {
        table.add_row(vec![Cell::new(plugin)]);
    }
    println!("{table}");
}

pub fn print_history(report: &HistoryReport) {
    let mut steps = Table::new();
    steps.set_header(vec![
        header_cell("Step"),
        header_cell("Outcome"),
        header_cell("Current"),
        header_cell("Reload"),
    ]);
    apply_table_style(&mut steps);
    align_column(&mut steps, 3, CellAlignment::Center);
    for step in &report.steps {
        steps.add_row(vec![
            Cell::new(&step.step),
            Cell::new(&step.outcome),
            Cell::new(&step.current),
            flag_cell(step.page_reload),
        ]);
    }
    println!("{steps}");

    let mut entries = Table::new();
    entries.set_header(vec![
        header_cell("#"),
        header_cell("View"),
        header_cell("Logical view"),
        header_cell("Parameters"),
    ]);
    apply_table_style(&mut entries);
    align_column(&mut entries, 0, CellAlignment::Right);
    for (index, entry) in report.entries.iter().enumerate() {
        let parameters = entry
            .parameters()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("&");
        entries.add_row(vec![
            Cell::new(index + 1),
            Cell::new(entry.view_id()),
            Cell::new(entry.logical_view_id()),
            if parameters.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(parameters)
            },
        ]);
    }
    println!("{entries}");
}

pub fn print_datalist(report: &DataListReport) {
    let mut rows = Table::new();
    rows.set_header(vec![
        header_cell("Row"),
        header_cell("Value"),
        header_cell("Status"),
        header_cell("Editing"),
    ]);
    apply_table_style(&mut rows);
    align_column(&mut rows, 3, CellAlignment::Center);
    for row in &report.rows {
        rows.add_row(vec![
            Cell::new(row.id),
            Cell::new(&row.value),
            status_cell(row.status),
            flag_cell(row.editing),
        ]);
    }
    println!("{rows}");
    println!("Has changes: {}", report.has_changes);

    if let Some(changes) = &report.changeset {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Change"), header_cell("Items")]);
        apply_table_style(&mut table);
        for (label, items) in [
            ("added", &changes.added),
            ("modified", &changes.modified),
            ("deleted", &changes.deleted),
            ("result", &changes.result),
        ] {
            table.add_row(vec![Cell::new(label), Cell::new(items.join(", "))]);
        }
        println!("{table}");
    }
    for event in &report.events {
        println!("event: {event}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: EditStatus) -> Cell {
    let color = match status {
        EditStatus::Unchanged => return dim_cell(status),
        EditStatus::Added => Color::Green,
        EditStatus::Modified => Color::Yellow,
        EditStatus::MarkedForDelete => Color::Red,
    };
    Cell::new(status).fg(color)
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Yellow)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
