//! CSS colour settings.

use cui_jsobject::JsString;

const TRANSPARENT: &str = "transparent";

/// A colour option.
///
/// Clearing a colour that was never set leaves it unset. Clearing it
/// explicitly through [`ColorProperty::set`] with `None` renders
/// `"transparent"`, so the client does not fall back to its default colour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColorProperty {
    #[default]
    Unset,
    Css(String),
    Transparent,
}

impl ColorProperty {
    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    /// `Some` stores the CSS value, `None` clears to transparent.
    pub fn set(&mut self, value: Option<&str>) {
        *self = match value {
            Some(css) if !css.trim().is_empty() => Self::Css(css.to_string()),
            _ => Self::Transparent,
        };
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn to_js(&self) -> JsString {
        match self {
            Self::Unset => JsString::absent(),
            Self::Css(css) => JsString::new(css.as_str()),
            Self::Transparent => JsString::new(TRANSPARENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use cui_jsobject::JsValue;

    use super::*;

    #[test]
    fn explicit_clear_is_transparent() {
        let mut color = ColorProperty::default();
        assert_eq!(color.to_js().value_as_string(), None);

        color.set(Some("#FF5500"));
        assert_eq!(color.to_js().value_as_string().as_deref(), Some("\"#FF5500\""));

        color.set(None);
        assert_eq!(
            color.to_js().value_as_string().as_deref(),
            Some("\"transparent\"")
        );

        color.set(Some("  "));
        assert_eq!(color, ColorProperty::Transparent);
    }
}
