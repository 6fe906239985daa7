//! Reload detection primitives.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-owned token identifying one distinct page view.
///
/// Presenting the same token twice means the page was reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewToken(u64);

impl ViewToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Issues view tokens and remembers which ones were presented.
///
/// Only the most recently presented tokens are kept; the oldest is
/// forgotten once `capacity` is exceeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TokenRegistry {
    next: u64,
    capacity: usize,
    seen: VecDeque<ViewToken>,
}

impl TokenRegistry {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            next: 0,
            capacity,
            seen: VecDeque::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn issue(&mut self) -> ViewToken {
        let token = ViewToken(self.next);
        self.next += 1;
        token
    }

    /// Records `token` and reports whether it was presented before.
    pub(crate) fn present(&mut self, token: ViewToken) -> bool {
        if self.seen.contains(&token) {
            return true;
        }
        let overflow = (self.seen.len() + 1)
            .saturating_sub(self.capacity)
            .min(self.seen.len());
        self.seen.drain(..overflow);
        self.seen.push_back(token);
        false
    }
}

/// A named read-and-set marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCheck {
    key: String,
    checked: bool,
}

impl Default for OneTimeCheck {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl OneTimeCheck {
    pub const DEFAULT_KEY: &'static str = "oneTimeCheck";

    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            checked: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Returns the current state and marks the check as done.
    pub fn read_and_set_checked(&mut self) -> bool {
        std::mem::replace(&mut self.checked, true)
    }
}
