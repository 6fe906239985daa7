//! Integration tests for the chart, history and data-list drivers.

use cui_cli::{chart, datalist, history};
use cui_datalist::EditStatus;
use insta::assert_snapshot;

// =========================================================================
// Charts
// =========================================================================

#[test]
fn test_render_simple_chart() {
    let definition = chart::parse_chart(
        r#"{
            "chart_id": "visits",
            "title": "Visits",
            "series": [{"label": "Clinic", "values": [3, 7, 5]}]
        }"#,
    )
    .unwrap();
    let rendered = chart::render_chart(&definition).unwrap();

    assert_snapshot!(
        rendered.script,
        @r#"$.jqplot("visits", [[3.000,7.000,5.000]], {title: {text:"Visits",escapeHtml:true},series:[{label:"Clinic"}]});"#
    );
    assert!(rendered.plugins.is_empty());
}

#[test]
fn test_render_time_line_chart() {
    let definition = chart::parse_chart(
        r#"{
            "chart_id": "timeline",
            "series": [{"points": [
                {"date": "2015-10-30", "value": 10},
                {"date": "2015-10-31", "value": 12}
            ]}]
        }"#,
    )
    .unwrap();
    let rendered = chart::render_chart(&definition).unwrap();

    assert_snapshot!(
        rendered.script,
        @r#"$.jqplot("timeline", [[["2015-10-30",10.000],["2015-10-31",12.000]]], {axes: {xaxis: {renderer:$.jqplot.DateAxisRenderer}},series:[{label:"Series 1"}]});"#
    );
    assert_eq!(rendered.plugins, ["jqplot.dateAxisRenderer.min.js"]);
}

#[test]
fn test_render_chart_collects_plugins_and_hooks() {
    let definition = chart::parse_chart(
        r#"{
            "chart_id": "load",
            "legend": "ne",
            "highlighter": true,
            "zoom": true,
            "series": [{"kind": "bar", "values": [1, 2]}]
        }"#,
    )
    .unwrap();
    let rendered = chart::render_chart(&definition).unwrap();

    assert_eq!(
        rendered.plugins,
        [
            "jqplot.barRenderer.min.js",
            "jqplot.cursor.min.js",
            "jqplot.enhancedLegendRenderer.min.js",
            "jqplot.highlighter.min.js",
        ]
    );
    assert!(
        rendered
            .script
            .ends_with("$('#load').bind('jqplotResetZoom',function(){plot.resetZoom();});")
    );
}

#[test]
fn test_chart_without_series_renders_nothing() {
    let definition = chart::parse_chart(r#"{"chart_id": "empty"}"#).unwrap();
    let rendered = chart::render_chart(&definition).unwrap();
    assert_eq!(rendered.script, "'';");
    assert!(rendered.plugins.is_empty());
}

#[test]
fn test_chart_errors_carry_context() {
    let blank = chart::parse_chart(r#"{"chart_id": " ", "series": [{"values": [1]}]}"#).unwrap();
    assert!(chart::render_chart(&blank).is_err());

    let bad_axis = chart::parse_chart(
        r#"{"chart_id": "c", "series": [{"values": [1], "y_axis": "xaxis"}]}"#,
    )
    .unwrap();
    let error = chart::render_chart(&bad_axis).unwrap_err();
    assert_eq!(format!("{error:#}"), "series 0: xaxis is not a valid y axis");

    let bad_date = chart::parse_chart(
        r#"{"chart_id": "c", "series": [{"points": [{"date": "30.10.2015", "value": 1}]}]}"#,
    )
    .unwrap();
    assert!(chart::render_chart(&bad_date).is_err());
}

// =========================================================================
// History
// =========================================================================

const HISTORY_CONFIG: &str = r#"{
    "max_depth": 3,
    "fallback": {"view_id": "/home.jsf", "logical_view_id": "home"},
    "parameter_filter": {"exclude_technical": true},
    "exclude_from_history": ["/login"]
}"#;

#[test]
fn test_replay_history_script() {
    let config = history::parse_config(HISTORY_CONFIG).unwrap();
    let script = history::parse_script(
        r#"{"steps": [
            {"action": "visit", "view_id": "/a.jsf"},
            {"action": "visit", "view_id": "/login/form.jsf"},
            {"action": "visit", "view_id": "/b.jsf", "parameters": [
                {"name": "id", "value": "4"},
                {"name": "dswid", "value": "w1"}
            ]},
            {"action": "reload"},
            {"action": "peek"}
        ]}"#,
    )
    .unwrap();
    let report = history::replay(config, &script).unwrap();

    let outcomes: Vec<&str> = report.steps.iter().map(|s| s.outcome.as_str()).collect();
    assert_eq!(
        outcomes,
        ["pushed", "excluded", "pushed", "reload", "previous is /a.jsf"]
    );
    assert!(report.steps[3].page_reload);
    assert_eq!(report.steps[2].current, "/b.jsf?id=4");

    let entries: Vec<String> = report.entries.iter().map(ToString::to_string).collect();
    assert_eq!(entries, ["/a.jsf", "/b.jsf?id=4"]);
}

#[test]
fn test_replay_back_navigation() {
    let config = history::parse_config(HISTORY_CONFIG).unwrap();
    let script = history::parse_script(
        r#"{"steps": [
            {"action": "back"},
            {"action": "visit", "view_id": "/a.jsf"},
            {"action": "visit", "view_id": "/b.jsf"},
            {"action": "back"}
        ]}"#,
    )
    .unwrap();
    let report = history::replay(config, &script).unwrap();

    assert_eq!(report.steps[0].outcome, "back to /home.jsf (pushed)");
    assert_eq!(report.steps[3].outcome, "back to /a.jsf (pushed)");
    assert_eq!(report.steps[3].current, "/a.jsf");
    assert!(report.entries.len() <= 3);
}

#[test]
fn test_history_config_errors() {
    let config = history::parse_config(r#"{"max_depth": 100, "fallback": {"view_id": "/h", "logical_view_id": "h"}}"#)
        .unwrap();
    let error = history::replay(config, &history::HistoryScript::default()).unwrap_err();
    assert_eq!(
        format!("{error:#}"),
        "create history manager: history depth must be between 2 and 99, but was 100"
    );

    let script = history::parse_script(r#"{"steps": [{"action": "visit", "view_id": ""}]}"#).unwrap();
    let config = history::parse_config(HISTORY_CONFIG).unwrap();
    assert!(history::replay(config, &script).is_err());
}

// =========================================================================
// Data lists
// =========================================================================

#[test]
fn test_replay_datalist_script() {
    let script = datalist::parse_script(
        r#"{
            "items": ["alpha", "beta", "gamma"],
            "steps": [
                {"action": "edit", "row": 0, "value": "ALPHA"},
                {"action": "save", "row": 0},
                {"action": "delete", "row": 1},
                {"action": "add", "value": "delta"},
                {"action": "save", "row": 3}
            ]
        }"#,
    )
    .unwrap();
    let report = datalist::replay(&script).unwrap();

    let statuses: Vec<EditStatus> = report.rows.iter().map(|row| row.status).collect();
    assert_eq!(
        statuses,
        [
            EditStatus::Modified,
            EditStatus::MarkedForDelete,
            EditStatus::Unchanged,
            EditStatus::Added,
        ]
    );
    assert!(report.has_changes);
    assert!(report.changeset.is_none());
    assert_eq!(
        report.events,
        ["Modified: alpha -> ALPHA", "MarkDelete: beta", "Added: delta"]
    );
}

#[test]
fn test_replay_datalist_commit() {
    let script = datalist::parse_script(
        r#"{
            "items": ["alpha", "beta"],
            "steps": [
                {"action": "delete", "row": 0},
                {"action": "add", "value": "gamma"},
                {"action": "commit"}
            ]
        }"#,
    )
    .unwrap();
    let report = datalist::replay(&script).unwrap();

    let changes = report.changeset.unwrap();
    assert_eq!(changes.added, ["gamma"]);
    assert_eq!(changes.deleted, ["alpha"]);
    assert_eq!(changes.result, ["beta", "gamma"]);
    assert!(!report.has_changes);
    assert!(report.rows.iter().all(|row| row.status == EditStatus::Unchanged));
}

#[test]
fn test_replay_datalist_cancel_all() {
    let script = datalist::parse_script(
        r#"{
            "items": ["alpha"],
            "steps": [
                {"action": "add", "value": "beta"},
                {"action": "cancel_all"}
            ]
        }"#,
    )
    .unwrap();
    let report = datalist::replay(&script).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert!(!report.has_changes);
}

#[test]
fn test_datalist_step_errors_name_the_step() {
    let script = datalist::parse_script(
        r#"{"items": ["alpha"], "steps": [{"action": "save", "row": 5}]}"#,
    )
    .unwrap();
    let error = datalist::replay(&script).unwrap_err();
    assert_eq!(format!("{error:#}"), "step 0: row 5 out of range (1 rows)");
}
