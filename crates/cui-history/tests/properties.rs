//! Property tests for the history stack guarantees.

use cui_history::{HistoryConfig, HistoryManager, ViewIdentifier};
use proptest::prelude::*;

fn manager(depth: usize) -> HistoryManager {
    let fallback = ViewIdentifier::new("/home.jsf").unwrap();
    HistoryManager::new(HistoryConfig::new(fallback).with_max_depth(depth)).unwrap()
}

fn view(index: u8) -> ViewIdentifier {
    ViewIdentifier::new(format!("/view-{index}.jsf")).unwrap()
}

#[derive(Debug, Clone)]
enum Step {
    Visit(u8),
    Back,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0u8..4).prop_map(Step::Visit),
        1 => Just(Step::Back),
    ]
}

fn assert_no_consecutive_duplicates(history: &HistoryManager) -> Result<(), TestCaseError> {
    let entries: Vec<&ViewIdentifier> = history.entries().collect();
    for pair in entries.windows(2) {
        prop_assert_ne!(pair[0].logical_view_id(), pair[1].logical_view_id());
    }
    Ok(())
}

proptest! {
    #[test]
    fn depth_is_bounded_and_keeps_latest(
        depth in 2usize..=12,
        visits in prop::collection::vec(0u8..20, 0..60),
    ) {
        let mut history = manager(depth);
        let mut recorded: Vec<ViewIdentifier> = Vec::new();
        for index in &visits {
            let next = view(*index);
            if recorded.last() != Some(&next) {
                recorded.push(next.clone());
            }
            history.add_current_uri_to_history(&next);
            prop_assert!(history.len() <= depth);
        }
        let start = recorded.len().saturating_sub(depth);
        let entries: Vec<ViewIdentifier> = history.entries().cloned().collect();
        prop_assert_eq!(entries, recorded[start..].to_vec());
    }

    #[test]
    fn no_consecutive_duplicates(steps in prop::collection::vec(step(), 0..60)) {
        let mut history = manager(10);
        for step in &steps {
            match step {
                Step::Visit(index) => {
                    history.add_current_uri_to_history(&view(*index));
                }
                Step::Back => {
                    history.pop_previous();
                    if history.len() >= 2 {
                        prop_assert_ne!(history.peek_previous(), history.current_view());
                    }
                }
            }
            assert_no_consecutive_duplicates(&history)?;
            prop_assert!(history.len() <= 10);
        }
    }

    #[test]
    fn repeating_current_view_is_noop(visits in prop::collection::vec(0u8..20, 1..20)) {
        let mut history = manager(10);
        for index in &visits {
            history.add_current_uri_to_history(&view(*index));
        }
        let before = history.clone();
        let current = history.current_view().clone();
        history.add_current_uri_to_history(&current);
        prop_assert_eq!(history, before);
    }

    #[test]
    fn peek_is_idempotent(visits in prop::collection::vec(0u8..20, 0..20)) {
        let mut history = manager(10);
        for index in &visits {
            history.add_current_uri_to_history(&view(*index));
        }
        let before = history.clone();
        let first = history.peek_previous().clone();
        let second = history.peek_previous().clone();
        prop_assert_eq!(first, second);
        prop_assert_eq!(history, before);
    }

    #[test]
    fn pop_returns_what_peek_showed(visits in prop::collection::vec(0u8..20, 0..20)) {
        let mut history = manager(10);
        for index in &visits {
            history.add_current_uri_to_history(&view(*index));
        }
        let len = history.len();
        let peeked = history.peek_previous().clone();
        let popped = history.pop_previous();
        prop_assert_eq!(&peeked, &popped);
        if len < 2 {
            prop_assert_eq!(history.len(), len);
            prop_assert_eq!(&popped, history.fallback());
        } else {
            prop_assert!(history.len() == len - 1 || history.len() == len - 2);
        }
    }
}
