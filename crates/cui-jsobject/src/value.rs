//! Leaf values and their literal syntax.

use std::fmt;

/// A value that can render itself in JavaScript literal syntax.
///
/// `None` means the value carries no information; owners drop the
/// surrounding property instead of rendering an empty literal.
pub trait JsValue: fmt::Debug {
    /// Literal notation of this value, or `None` if it is absent.
    fn value_as_string(&self) -> Option<String>;
}

impl<V: JsValue + ?Sized> JsValue for Box<V> {
    fn value_as_string(&self) -> Option<String> {
        (**self).value_as_string()
    }
}

impl<V: JsValue> JsValue for Option<V> {
    fn value_as_string(&self) -> Option<String> {
        self.as_ref().and_then(JsValue::value_as_string)
    }
}

/// A string rendered in double quotes.
///
/// The content is written verbatim; callers are responsible for escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsString(Option<String>);

impl JsString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for JsString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for JsString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Option<String>> for JsString {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<Option<&str>> for JsString {
    fn from(value: Option<&str>) -> Self {
        Self(value.map(str::to_string))
    }
}

impl JsValue for JsString {
    fn value_as_string(&self) -> Option<String> {
        self.0.as_ref().map(|value| format!("\"{value}\""))
    }
}

/// A bare `true` / `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsBoolean(Option<bool>);

impl JsBoolean {
    pub const TRUE: Self = Self(Some(true));
    pub const FALSE: Self = Self(Some(false));

    pub fn create(value: Option<bool>) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Option<bool> {
        self.0
    }
}

impl From<bool> for JsBoolean {
    fn from(value: bool) -> Self {
        Self(Some(value))
    }
}

impl From<Option<bool>> for JsBoolean {
    fn from(value: Option<bool>) -> Self {
        Self(value)
    }
}

impl JsValue for JsBoolean {
    fn value_as_string(&self) -> Option<String> {
        self.0.map(|value| value.to_string())
    }
}

/// A floating point number rendered fixed-point with three fraction digits.
///
/// Rendering never depends on the host locale: the separator is always `.`.
/// Non-finite values have no literal form here and render as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsDouble(Option<f64>);

impl JsDouble {
    pub fn new(value: f64) -> Self {
        Self(Some(value))
    }

    pub fn create(value: Option<f64>) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

impl From<f64> for JsDouble {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Option<f64>> for JsDouble {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

impl JsValue for JsDouble {
    fn value_as_string(&self) -> Option<String> {
        self.0
            .filter(|value| value.is_finite())
            .map(|value| format!("{value:.3}"))
    }
}

/// An integral number rendered without fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsInteger(Option<i64>);

impl JsInteger {
    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    pub fn create(value: Option<i64>) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }
}

impl From<i64> for JsInteger {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for JsInteger {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<Option<i64>> for JsInteger {
    fn from(value: Option<i64>) -> Self {
        Self(value)
    }
}

impl JsValue for JsInteger {
    fn value_as_string(&self) -> Option<String> {
        self.0.map(|value| value.to_string())
    }
}

/// An unquoted identifier, e.g. a renderer constructor or a function name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsReference(Option<String>);

impl JsReference {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(Some(identifier.into()))
    }

    pub fn identifier(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl JsValue for JsReference {
    fn value_as_string(&self) -> Option<String> {
        self.0.clone()
    }
}
