//! Navigable locations and matching on logical view ids.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, Result};
use crate::parameter::{ParameterFilter, UrlParameter};

const VIEW_SUFFIXES: [&str; 2] = ["_xhtml", "_jsf"];

/// An immutable navigable location.
///
/// Two identifiers are equal when view id, logical view id and parameters
/// all match. History deduplication only looks at the logical view id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewIdentifier {
    view_id: String,
    logical_view_id: String,
    #[serde(default)]
    parameters: Vec<UrlParameter>,
}

impl ViewIdentifier {
    /// Creates an identifier whose logical id equals the view id.
    pub fn new(view_id: impl Into<String>) -> Result<Self> {
        let view_id = view_id.into();
        Self::with_logical_id(view_id.clone(), view_id)
    }

    pub fn with_logical_id(
        view_id: impl Into<String>,
        logical_view_id: impl Into<String>,
    ) -> Result<Self> {
        let view_id = view_id.into();
        if view_id.trim().is_empty() {
            return Err(HistoryError::EmptyViewId);
        }
        let logical_view_id = logical_view_id.into();
        Ok(Self {
            logical_view_id: if logical_view_id.trim().is_empty() {
                view_id.clone()
            } else {
                logical_view_id
            },
            view_id,
            parameters: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(UrlParameter::new(name, value));
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<UrlParameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    pub fn logical_view_id(&self) -> &str {
        &self.logical_view_id
    }

    pub fn parameters(&self) -> &[UrlParameter] {
        &self.parameters
    }

    /// Whether both identifiers point at the same logical view.
    pub fn same_view(&self, other: &ViewIdentifier) -> bool {
        self.logical_view_id == other.logical_view_id
    }

    /// The view id as a DOM-safe key: every character outside `[A-Za-z0-9]`
    /// becomes `_` and a trailing `_xhtml` or `_jsf` is dropped.
    pub fn short_identifier(&self) -> String {
        let replaced: String = self
            .view_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        VIEW_SUFFIXES
            .iter()
            .find_map(|suffix| replaced.strip_suffix(suffix))
            .map_or_else(|| replaced.clone(), str::to_string)
    }

    /// A copy keeping only the parameters that pass `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &ParameterFilter) -> Self {
        Self {
            view_id: self.view_id.clone(),
            logical_view_id: self.logical_view_id.clone(),
            parameters: filter.apply(&self.parameters),
        }
    }

    pub fn parameter_map(&self) -> BTreeMap<String, Vec<String>> {
        UrlParameter::to_map(&self.parameters)
    }
}

impl fmt::Display for ViewIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.view_id)?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            write!(f, "{separator}{parameter}")?;
        }
        Ok(())
    }
}

/// Matches views whose logical id starts with one of a list of prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ViewMatcher {
    prefixes: Vec<String>,
}

impl ViewMatcher {
    /// Blank prefixes are ignored.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|prefix| !prefix.trim().is_empty())
                .collect(),
        }
    }

    pub fn matches(&self, view: &ViewIdentifier) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| view.logical_view_id().starts_with(prefix.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl From<Vec<String>> for ViewMatcher {
    fn from(prefixes: Vec<String>) -> Self {
        Self::new(prefixes)
    }
}

impl From<ViewMatcher> for Vec<String> {
    fn from(matcher: ViewMatcher) -> Self {
        matcher.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_id_is_rejected() {
        assert_eq!(ViewIdentifier::new(""), Err(HistoryError::EmptyViewId));
        assert_eq!(ViewIdentifier::new("  "), Err(HistoryError::EmptyViewId));
    }

    #[test]
    fn blank_logical_id_falls_back_to_view_id() {
        let view = ViewIdentifier::with_logical_id("/a.jsf", "").unwrap();
        assert_eq!(view.logical_view_id(), "/a.jsf");
    }

    #[test]
    fn short_identifier_is_dom_safe() {
        let cases = [
            ("/pages/home.jsf", "_pages_home"),
            ("/portal/übersicht.xhtml", "_portal__bersicht"),
            ("plain", "plain"),
            ("/a/b-c.html", "_a_b_c_html"),
        ];
        for (view_id, expected) in cases {
            let view = ViewIdentifier::new(view_id).unwrap();
            assert_eq!(view.short_identifier(), expected, "for {view_id}");
        }
    }

    #[test]
    fn display_appends_parameters() {
        let view = ViewIdentifier::new("/detail.jsf")
            .unwrap()
            .with_parameter("id", "4")
            .with_parameter("tab", "notes");
        assert_eq!(view.to_string(), "/detail.jsf?id=4&tab=notes");
    }

    #[test]
    fn matcher_ignores_blank_prefixes() {
        let matcher = ViewMatcher::new(["", "  ", "/admin/"]);
        assert!(!matcher.is_empty());
        assert!(matcher.matches(&ViewIdentifier::new("/admin/users.jsf").unwrap()));
        assert!(!matcher.matches(&ViewIdentifier::new("/home.jsf").unwrap()));
        assert!(!ViewMatcher::new([""]).matches(&ViewIdentifier::new("/x").unwrap()));
    }
}
