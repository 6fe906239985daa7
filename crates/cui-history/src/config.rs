//! History configuration.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterFilter;
use crate::view::{ViewIdentifier, ViewMatcher};

/// Smallest accepted history depth.
pub const MIN_HISTORY_DEPTH: usize = 2;
/// Largest accepted history depth.
pub const MAX_HISTORY_DEPTH: usize = 99;
/// Default history depth.
pub const DEFAULT_HISTORY_DEPTH: usize = 10;
/// Default number of remembered view tokens.
pub const DEFAULT_RELOAD_TOKEN_CAPACITY: usize = 32;

fn default_max_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

fn default_reload_token_capacity() -> usize {
    DEFAULT_RELOAD_TOKEN_CAPACITY
}

/// Settings for a [`HistoryManager`](crate::HistoryManager).
///
/// Values are checked when the manager is built, so a deserialized
/// configuration may still be rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of entries kept, oldest evicted first.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// View returned when the history has nothing to offer.
    pub fallback: Option<ViewIdentifier>,

    #[serde(default)]
    pub parameter_filter: ParameterFilter,

    /// Logical view id prefixes that are never recorded.
    #[serde(default)]
    pub exclude_from_history: ViewMatcher,

    /// How many issued view tokens are remembered for reload detection.
    #[serde(default = "default_reload_token_capacity")]
    pub reload_token_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_HISTORY_DEPTH,
            fallback: None,
            parameter_filter: ParameterFilter::default(),
            exclude_from_history: ViewMatcher::default(),
            reload_token_capacity: DEFAULT_RELOAD_TOKEN_CAPACITY,
        }
    }
}

impl HistoryConfig {
    pub fn new(fallback: ViewIdentifier) -> Self {
        Self {
            fallback: Some(fallback),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_parameter_filter(mut self, filter: ParameterFilter) -> Self {
        self.parameter_filter = filter;
        self
    }

    #[must_use]
    pub fn with_exclude_from_history(mut self, matcher: ViewMatcher) -> Self {
        self.exclude_from_history = matcher;
        self
    }

    #[must_use]
    pub fn with_reload_token_capacity(mut self, capacity: usize) -> Self {
        self.reload_token_capacity = capacity;
        self
    }
}
