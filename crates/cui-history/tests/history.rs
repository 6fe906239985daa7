//! Integration tests for the navigation history.

use cui_history::{
    HistoryConfig, HistoryError, HistoryManager, ParameterFilter, PushOutcome, UrlParameter,
    ViewIdentifier, ViewMatcher,
};

fn view(id: &str) -> ViewIdentifier {
    ViewIdentifier::new(id).unwrap()
}

fn history() -> HistoryManager {
    HistoryManager::new(HistoryConfig::new(view("/home.jsf"))).unwrap()
}

fn visit(history: &mut HistoryManager, ids: &[&str]) {
    for id in ids {
        history.add_current_uri_to_history(&view(id));
    }
}

fn ids(history: &HistoryManager) -> Vec<&str> {
    history.entries().map(ViewIdentifier::view_id).collect()
}

// =========================================================================
// Recording views
// =========================================================================

#[test]
fn test_current_view_is_latest_entry() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf"]);
    assert_eq!(history.current_view(), &view("/b.jsf"));
    assert_eq!(history.len(), 2);
}

#[test]
fn test_same_logical_view_is_recorded_once() {
    let mut history = history();
    let first = ViewIdentifier::with_logical_id("/list.jsf", "patients")
        .unwrap()
        .with_parameter("page", "1");
    let second = ViewIdentifier::with_logical_id("/list-v2.jsf", "patients")
        .unwrap()
        .with_parameter("page", "2");

    assert_eq!(history.add_current_uri_to_history(&first), PushOutcome::Pushed);
    assert_eq!(history.add_current_uri_to_history(&second), PushOutcome::Duplicate);
    assert_eq!(history.len(), 1);
    assert_eq!(history.current_view(), &first);
}

#[test]
fn test_same_view_after_another_is_recorded_again() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf", "/a.jsf"]);
    assert_eq!(ids(&history), ["/a.jsf", "/b.jsf", "/a.jsf"]);
}

#[test]
fn test_excluded_views_are_not_recorded() {
    let config = HistoryConfig::new(view("/home.jsf"))
        .with_exclude_from_history(ViewMatcher::new(["/login", " "]));
    let mut history = HistoryManager::new(config).unwrap();

    assert_eq!(
        history.add_current_uri_to_history(&view("/login/form.jsf")),
        PushOutcome::Excluded
    );
    assert!(history.is_empty());
    assert_eq!(
        history.add_current_uri_to_history(&view("/start.jsf")),
        PushOutcome::Pushed
    );
}

#[test]
fn test_parameters_are_filtered_before_storing() {
    let filter = ParameterFilter::technical().with_excluded_name("token");
    let config = HistoryConfig::new(view("/home.jsf")).with_parameter_filter(filter.clone());
    let mut history = HistoryManager::new(config).unwrap();

    let detail = view("/detail.jsf")
        .with_parameter("id", "7")
        .with_parameter("dswid", "w1")
        .with_parameter("javax.faces.ViewState", "abc")
        .with_parameter("token", "secret");
    history.add_current_uri_to_history(&detail);

    assert_eq!(history.parameter_filter(), &filter);
    assert_eq!(
        history.current_view().parameters(),
        [UrlParameter::new("id", "7")]
    );
    assert_eq!(history.current_view().to_string(), "/detail.jsf?id=7");
}

// =========================================================================
// Back navigation
// =========================================================================

#[test]
fn test_pop_removes_entry_below_current() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf", "/c.jsf"]);

    assert_eq!(history.pop_previous(), view("/b.jsf"));
    assert_eq!(ids(&history), ["/a.jsf", "/c.jsf"]);
    assert_eq!(history.pop_previous(), view("/a.jsf"));
    assert_eq!(history.pop_previous(), view("/home.jsf"));
    assert_eq!(ids(&history), ["/c.jsf"]);
}

#[test]
fn test_pop_does_not_leave_current_view_below_itself() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf", "/a.jsf"]);

    assert_eq!(history.pop_previous(), view("/b.jsf"));
    assert_eq!(ids(&history), ["/a.jsf"]);
    assert_eq!(history.peek_previous(), history.fallback());
}

#[test]
fn test_pop_collapses_only_the_repeated_entry() {
    let mut history = history();
    visit(&mut history, &["/x.jsf", "/a.jsf", "/b.jsf", "/a.jsf"]);

    assert_eq!(history.pop_previous(), view("/b.jsf"));
    assert_eq!(ids(&history), ["/x.jsf", "/a.jsf"]);
    assert_eq!(history.peek_previous(), &view("/x.jsf"));
}

#[test]
fn test_pop_with_single_entry_returns_fallback() {
    let mut history = history();
    visit(&mut history, &["/a.jsf"]);
    assert_eq!(history.pop_previous(), view("/home.jsf"));
    assert_eq!(ids(&history), ["/a.jsf"]);
}

#[test]
fn test_peek_does_not_mutate() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf"]);
    let first = history.peek_previous().clone();
    let second = history.peek_previous().clone();
    assert_eq!(first, view("/a.jsf"));
    assert_eq!(first, second);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_clear_resets_to_fallback() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf"]);
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.current_view(), history.fallback());
}

// =========================================================================
// Reload detection
// =========================================================================

#[test]
fn test_repeated_token_is_a_reload() {
    let mut history = history();
    let token = history.issue_view_token();

    assert_eq!(history.track_view(token, &view("/a.jsf")), PushOutcome::Pushed);
    assert!(!history.is_page_reload());

    assert_eq!(history.track_view(token, &view("/a.jsf")), PushOutcome::Reload);
    assert!(history.is_page_reload());
    assert_eq!(history.len(), 1);

    let next = history.issue_view_token();
    assert_ne!(token, next);
    assert_eq!(history.track_view(next, &view("/b.jsf")), PushOutcome::Pushed);
    assert!(!history.is_page_reload());
}

#[test]
fn test_reload_does_not_push_new_view() {
    let mut history = history();
    let token = history.issue_view_token();
    history.track_view(token, &view("/a.jsf"));
    assert_eq!(history.track_view(token, &view("/b.jsf")), PushOutcome::Reload);
    assert_eq!(ids(&history), ["/a.jsf"]);
}

// =========================================================================
// Configuration and persistence
// =========================================================================

#[test]
fn test_config_loads_from_json_with_defaults() {
    let json = r#"{
        "fallback": {"view_id": "/home.jsf", "logical_view_id": "home"},
        "exclude_from_history": ["/admin/"],
        "parameter_filter": {"exclude_technical": true}
    }"#;
    let config: HistoryConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.max_depth, 10);
    assert_eq!(config.reload_token_capacity, 32);
    assert!(config.parameter_filter.exclude_technical);

    let history = HistoryManager::new(config).unwrap();
    assert_eq!(history.current_view().logical_view_id(), "home");
}

#[test]
fn test_config_without_fallback_is_rejected() {
    let config: HistoryConfig = serde_json::from_str(r#"{"max_depth": 5}"#).unwrap();
    assert_eq!(
        HistoryManager::new(config).unwrap_err(),
        HistoryError::MissingFallback
    );
}

#[test]
fn test_fallback_with_empty_view_id_is_rejected() {
    let config: HistoryConfig =
        serde_json::from_str(r#"{"fallback": {"view_id": "", "logical_view_id": ""}}"#).unwrap();
    assert_eq!(
        HistoryManager::new(config).unwrap_err(),
        HistoryError::EmptyViewId
    );
}

#[test]
fn test_invalid_depth_message() {
    let error = HistoryManager::new(HistoryConfig::new(view("/home.jsf")).with_max_depth(1))
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "history depth must be between 2 and 99, but was 1"
    );
}

#[test]
fn test_history_survives_json_round_trip() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf"]);
    let token = history.issue_view_token();
    history.track_view(token, &view("/c.jsf"));
    history.set_page_reload(true);

    let json = serde_json::to_string(&history).unwrap();
    let mut restored: HistoryManager = serde_json::from_str(&json).unwrap();

    assert_eq!(ids(&restored), ["/a.jsf", "/b.jsf", "/c.jsf"]);
    // The reload flag is per request and not persisted.
    assert!(!restored.is_page_reload());
    assert_eq!(restored.track_view(token, &view("/c.jsf")), PushOutcome::Reload);
}

#[test]
fn test_restored_history_with_lowered_depth_stays_bounded() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf", "/c.jsf"]);
    let mut json = serde_json::to_value(&history).unwrap();
    json["max_depth"] = 2.into();

    let mut restored: HistoryManager = serde_json::from_value(json).unwrap();
    assert_eq!(restored.max_depth(), 2);
    assert_eq!(ids(&restored), ["/b.jsf", "/c.jsf"]);

    restored.add_current_uri_to_history(&view("/d.jsf"));
    assert_eq!(ids(&restored), ["/c.jsf", "/d.jsf"]);
}

#[test]
fn test_restored_history_drops_consecutive_duplicates() {
    let mut history = history();
    visit(&mut history, &["/a.jsf", "/b.jsf"]);
    let mut json = serde_json::to_value(&history).unwrap();
    let entry = json["stack"][1].clone();
    json["stack"].as_array_mut().unwrap().push(entry);

    let restored: HistoryManager = serde_json::from_value(json).unwrap();
    assert_eq!(ids(&restored), ["/a.jsf", "/b.jsf"]);
}

#[test]
fn test_restored_history_is_checked() {
    let history = history();
    let json = serde_json::to_value(&history).unwrap();

    let mut depth = json.clone();
    depth["max_depth"] = 1.into();
    let error = serde_json::from_value::<HistoryManager>(depth).unwrap_err();
    assert_eq!(
        error.to_string(),
        "history depth must be between 2 and 99, but was 1"
    );

    let mut capacity = json.clone();
    capacity["tokens"]["capacity"] = 0.into();
    let error = serde_json::from_value::<HistoryManager>(capacity).unwrap_err();
    assert_eq!(error.to_string(), "reload token capacity must be at least 1");

    let mut fallback = json;
    fallback["fallback"]["view_id"] = " ".into();
    assert!(serde_json::from_value::<HistoryManager>(fallback).is_err());
}
