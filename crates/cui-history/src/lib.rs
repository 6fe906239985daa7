//! Navigation history for server-rendered views.
//!
//! [`HistoryManager`] keeps a bounded, most-recent-last stack of visited
//! views for "back" navigation. Consecutive visits to the same logical view
//! are recorded once, URL parameters pass through a [`ParameterFilter`]
//! before they are stored, and an empty history always resolves to the
//! configured fallback view.
//!
//! Reloads are detected with caller-owned [`ViewToken`]s: issue one per
//! rendered page and present it with [`HistoryManager::track_view`]. A
//! token presented twice marks the request as a reload.
//!
//! # Example
//!
//! ```
//! use cui_history::{HistoryConfig, HistoryManager, PushOutcome, ViewIdentifier};
//!
//! let home = ViewIdentifier::new("/home.jsf")?;
//! let mut history = HistoryManager::new(HistoryConfig::new(home.clone()))?;
//!
//! let list = ViewIdentifier::new("/patients.jsf")?;
//! let detail = ViewIdentifier::new("/patient.jsf")?.with_parameter("id", "42");
//! history.add_current_uri_to_history(&list);
//! history.add_current_uri_to_history(&detail);
//!
//! let token = history.issue_view_token();
//! assert_eq!(history.track_view(token, &detail), PushOutcome::Duplicate);
//! assert_eq!(history.track_view(token, &detail), PushOutcome::Reload);
//! assert!(history.is_page_reload());
//!
//! assert_eq!(history.peek_previous(), &list);
//! assert_eq!(history.pop_previous(), list);
//! assert_eq!(history.peek_previous(), &home);
//! # Ok::<(), cui_history::HistoryError>(())
//! ```

mod config;
mod error;
mod manager;
mod parameter;
mod reload;
mod view;

pub use config::{
    DEFAULT_HISTORY_DEPTH, DEFAULT_RELOAD_TOKEN_CAPACITY, HistoryConfig, MAX_HISTORY_DEPTH,
    MIN_HISTORY_DEPTH,
};
pub use error::{HistoryError, Result};
pub use manager::{HistoryManager, PushOutcome};
pub use parameter::{ParameterFilter, UrlParameter, WINDOW_ID_PARAMETER};
pub use reload::{OneTimeCheck, ViewToken};
pub use view::{ViewIdentifier, ViewMatcher};
