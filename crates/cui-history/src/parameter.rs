//! URL parameters and the filter deciding which of them are kept.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Window id parameter added by the client-side window handler.
pub const WINDOW_ID_PARAMETER: &str = "dswid";

const TECHNICAL_PREFIXES: [&str; 2] = ["javax.faces.", "jakarta.faces."];

/// A single name/value URL parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlParameter {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl UrlParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Groups parameters by name, keeping values in their original order.
    pub fn to_map(parameters: &[UrlParameter]) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for parameter in parameters {
            map.entry(parameter.name.clone())
                .or_default()
                .push(parameter.value.clone());
        }
        map
    }
}

impl fmt::Display for UrlParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Decides which URL parameters are kept in history entries.
///
/// The default keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterFilter {
    /// Parameter names that are dropped, compared case-insensitively.
    #[serde(default)]
    pub excluded_names: Vec<String>,

    /// Parameters whose name starts with one of these are dropped.
    #[serde(default)]
    pub excluded_prefixes: Vec<String>,

    /// Drops framework parameters (`javax.faces.*`, `jakarta.faces.*`) and
    /// the window id.
    #[serde(default)]
    pub exclude_technical: bool,
}

impl ParameterFilter {
    /// A filter that only drops framework-technical parameters.
    #[must_use]
    pub fn technical() -> Self {
        Self {
            exclude_technical: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_excluded_name(mut self, name: impl Into<String>) -> Self {
        self.excluded_names.push(name.into());
        self
    }

    #[must_use]
    pub fn with_excluded_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.excluded_prefixes.push(prefix.into());
        self
    }

    #[must_use]
    pub fn with_exclude_technical(mut self, exclude: bool) -> Self {
        self.exclude_technical = exclude;
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        if self.exclude_technical
            && (name.eq_ignore_ascii_case(WINDOW_ID_PARAMETER)
                || TECHNICAL_PREFIXES
                    .iter()
                    .any(|prefix| name.starts_with(prefix)))
        {
            return true;
        }
        self.excluded_names
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(name))
            || self
                .excluded_prefixes
                .iter()
                .any(|prefix| !prefix.is_empty() && name.starts_with(prefix.as_str()))
    }

    /// The parameters that pass the filter, in their original order.
    pub fn apply(&self, parameters: &[UrlParameter]) -> Vec<UrlParameter> {
        parameters
            .iter()
            .filter(|parameter| !self.is_excluded(&parameter.name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_keeps_everything() {
        let filter = ParameterFilter::default();
        assert!(!filter.is_excluded("dswid"));
        assert!(!filter.is_excluded("javax.faces.ViewState"));
        assert!(!filter.is_excluded("id"));
    }

    #[test]
    fn technical_filter_drops_framework_parameters() {
        let filter = ParameterFilter::technical();
        assert!(filter.is_excluded("dswid"));
        assert!(filter.is_excluded("javax.faces.ViewState"));
        assert!(filter.is_excluded("jakarta.faces.ClientWindow"));
        assert!(!filter.is_excluded("patientId"));
    }

    #[test]
    fn names_and_prefixes_are_excluded() {
        let filter = ParameterFilter::default()
            .with_excluded_name("Token")
            .with_excluded_prefix("utm_")
            .with_excluded_prefix("");
        assert!(filter.is_excluded("token"));
        assert!(filter.is_excluded("utm_source"));
        assert!(!filter.is_excluded("page"));

        let kept = filter.apply(&[
            UrlParameter::new("page", "2"),
            UrlParameter::new("utm_medium", "mail"),
            UrlParameter::new("TOKEN", "x"),
        ]);
        assert_eq!(kept, [UrlParameter::new("page", "2")]);
    }

    #[test]
    fn parameters_group_by_name() {
        let map = UrlParameter::to_map(&[
            UrlParameter::new("tab", "a"),
            UrlParameter::new("id", "7"),
            UrlParameter::new("tab", "b"),
        ]);
        assert_eq!(map["tab"], ["a", "b"]);
        assert_eq!(map["id"], ["7"]);
    }
}
