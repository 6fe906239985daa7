//! Ordered literal arrays.

use crate::value::JsValue;

/// An array literal `[a,b,...]`.
///
/// Absent elements are skipped. An array without present elements renders
/// `[]`, never absent, so nested empty collections keep their position.
#[derive(Debug, Clone, PartialEq)]
pub struct JsArray<T> {
    items: Vec<T>,
}

impl<T> Default for JsArray<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: JsValue> JsArray<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Appends the item only when it renders something.
    pub fn push_if_present(&mut self, item: T) -> &mut Self {
        if item.value_as_string().is_some() {
            self.items.push(item);
        }
        self
    }

    #[must_use]
    pub fn with(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for JsArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for JsArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: JsValue> JsValue for JsArray<T> {
    fn value_as_string(&self) -> Option<String> {
        let rendered: Vec<String> = self
            .items
            .iter()
            .filter_map(JsValue::value_as_string)
            .collect();
        Some(format!("[{}]", rendered.join(",")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{JsDouble, JsString};

    #[test]
    fn empty_array_renders_brackets() {
        let array: JsArray<JsString> = JsArray::new();
        assert_eq!(array.value_as_string().as_deref(), Some("[]"));
    }

    #[test]
    fn absent_elements_are_skipped() {
        let array: JsArray<JsDouble> = [JsDouble::new(1.0), JsDouble::create(None), JsDouble::new(2.5)]
            .into_iter()
            .collect();
        assert_eq!(array.len(), 3);
        assert_eq!(array.value_as_string().as_deref(), Some("[1.000,2.500]"));
    }

    #[test]
    fn push_if_present_drops_absent_values() {
        let mut array = JsArray::new();
        array
            .push_if_present(JsString::absent())
            .push_if_present(JsString::new("a"));
        assert_eq!(array.len(), 1);
    }
}
