//! The navigation history stack.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{HistoryConfig, MAX_HISTORY_DEPTH, MIN_HISTORY_DEPTH};
use crate::error::{HistoryError, Result};
use crate::parameter::ParameterFilter;
use crate::reload::{TokenRegistry, ViewToken};
use crate::view::{ViewIdentifier, ViewMatcher};

/// What happened to a view offered to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushOutcome {
    /// Recorded as the new current view.
    Pushed,
    /// Same logical view as the current one; nothing changed.
    Duplicate,
    /// Matched an exclude-from-history prefix.
    Excluded,
    /// The view token was presented before.
    Reload,
}

impl PushOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pushed => "pushed",
            Self::Duplicate => "duplicate",
            Self::Excluded => "excluded",
            Self::Reload => "reload",
        }
    }
}

impl fmt::Display for PushOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded, most-recent-last history of visited views.
///
/// The stack never holds two consecutive entries with the same logical view
/// id, and the fallback view is only ever returned, never stored.
///
/// Deserialization runs the same checks as [`HistoryManager::new`] and trims
/// a restored stack to the restored depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryState")]
pub struct HistoryManager {
    max_depth: usize,
    fallback: ViewIdentifier,
    parameter_filter: ParameterFilter,
    exclude_from_history: ViewMatcher,
    stack: VecDeque<ViewIdentifier>,
    tokens: TokenRegistry,
    #[serde(skip)]
    page_reload: bool,
}

/// Persisted form of a [`HistoryManager`], checked before it is accepted.
#[derive(Deserialize)]
struct HistoryState {
    max_depth: usize,
    fallback: ViewIdentifier,
    parameter_filter: ParameterFilter,
    exclude_from_history: ViewMatcher,
    stack: VecDeque<ViewIdentifier>,
    tokens: TokenRegistry,
}

impl TryFrom<HistoryState> for HistoryManager {
    type Error = HistoryError;

    fn try_from(state: HistoryState) -> Result<Self> {
        check_limits(state.max_depth, &state.fallback, state.tokens.capacity())?;
        let mut manager = Self {
            max_depth: state.max_depth,
            fallback: state.fallback,
            parameter_filter: state.parameter_filter,
            exclude_from_history: state.exclude_from_history,
            stack: state.stack,
            tokens: state.tokens,
            page_reload: false,
        };
        manager.normalize();
        debug!(entries = manager.stack.len(), "restored history manager");
        Ok(manager)
    }
}

fn check_limits(max_depth: usize, fallback: &ViewIdentifier, token_capacity: usize) -> Result<()> {
    if !(MIN_HISTORY_DEPTH..=MAX_HISTORY_DEPTH).contains(&max_depth) {
        return Err(HistoryError::InvalidDepth(max_depth));
    }
    if fallback.view_id().trim().is_empty() {
        return Err(HistoryError::EmptyViewId);
    }
    if token_capacity == 0 {
        return Err(HistoryError::InvalidTokenCapacity);
    }
    Ok(())
}

impl HistoryManager {
    pub fn new(config: HistoryConfig) -> Result<Self> {
        let fallback = config.fallback.ok_or(HistoryError::MissingFallback)?;
        check_limits(config.max_depth, &fallback, config.reload_token_capacity)?;
        debug!(
            max_depth = config.max_depth,
            fallback = %fallback,
            "created history manager"
        );
        Ok(Self {
            max_depth: config.max_depth,
            fallback,
            parameter_filter: config.parameter_filter,
            exclude_from_history: config.exclude_from_history,
            stack: VecDeque::with_capacity(config.max_depth),
            tokens: TokenRegistry::new(config.reload_token_capacity),
            page_reload: false,
        })
    }

    /// The most recently recorded view, or the fallback.
    pub fn current_view(&self) -> &ViewIdentifier {
        self.stack.back().unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &ViewIdentifier {
        &self.fallback
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn parameter_filter(&self) -> &ParameterFilter {
        &self.parameter_filter
    }

    /// Records `view` unless it is excluded or repeats the current view.
    ///
    /// Must not be called for framework postbacks of the current page.
    pub fn add_current_uri_to_history(&mut self, view: &ViewIdentifier) -> PushOutcome {
        if self.exclude_from_history.matches(view) {
            trace!(view = %view, "view excluded from history");
            return PushOutcome::Excluded;
        }
        if self.stack.back().is_some_and(|top| top.same_view(view)) {
            trace!(view = %view, "view already current");
            return PushOutcome::Duplicate;
        }
        self.evict_to(self.max_depth.saturating_sub(1));
        let entry = view.filtered(&self.parameter_filter);
        debug!(view = %entry, depth = self.stack.len() + 1, "recorded view");
        self.stack.push_back(entry);
        PushOutcome::Pushed
    }

    /// A fresh token for a page view that is about to be rendered.
    pub fn issue_view_token(&mut self) -> ViewToken {
        self.tokens.issue()
    }

    /// Records a page view identified by `token`.
    ///
    /// A token seen before marks the request as a reload and records
    /// nothing. Otherwise the reload flag is cleared and `view` is offered
    /// to the history.
    pub fn track_view(&mut self, token: ViewToken, view: &ViewIdentifier) -> PushOutcome {
        if self.tokens.present(token) {
            debug!(token = %token, view = %view, "page reload detected");
            self.page_reload = true;
            return PushOutcome::Reload;
        }
        self.page_reload = false;
        self.add_current_uri_to_history(view)
    }

    pub fn is_page_reload(&self) -> bool {
        self.page_reload
    }

    pub fn set_page_reload(&mut self, page_reload: bool) {
        self.page_reload = page_reload;
    }

    /// Removes and returns the entry below the current one, or returns the
    /// fallback when there is none.
    ///
    /// An entry that ends up directly below a current view with the same
    /// logical id is dropped as well.
    pub fn pop_previous(&mut self) -> ViewIdentifier {
        let len = self.stack.len();
        match len.checked_sub(2).and_then(|index| self.stack.remove(index)) {
            Some(previous) => {
                debug!(view = %previous, "popped previous view");
                self.collapse_below_current();
                previous
            }
            None => {
                trace!("no previous view; using fallback");
                self.fallback.clone()
            }
        }
    }

    /// The entry below the current one, or the fallback.
    pub fn peek_previous(&self) -> &ViewIdentifier {
        self.stack
            .len()
            .checked_sub(2)
            .and_then(|index| self.stack.get(index))
            .unwrap_or(&self.fallback)
    }

    /// Recorded entries, oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &ViewIdentifier> + '_ {
        self.stack.iter()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        debug!(entries = self.stack.len(), "cleared history");
        self.stack.clear();
    }

    fn collapse_below_current(&mut self) {
        while let Some(index) = self.stack.len().checked_sub(2)
            && let (Some(below), Some(top)) = (self.stack.get(index), self.stack.back())
            && below.same_view(top)
        {
            trace!(view = %below, "dropped entry repeating the current view");
            self.stack.remove(index);
        }
    }

    fn evict_to(&mut self, len: usize) {
        while self.stack.len() > len
            && let Some(evicted) = self.stack.pop_front()
        {
            trace!(view = %evicted, "evicted oldest history entry");
        }
    }

    /// Brings restored entries back in line with the stack guarantees.
    fn normalize(&mut self) {
        for entry in std::mem::take(&mut self.stack) {
            if !self.stack.back().is_some_and(|top| top.same_view(&entry)) {
                self.stack.push_back(entry);
            }
        }
        self.evict_to(self.max_depth);
    }
}
