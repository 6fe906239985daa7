//! Chart title.

use cui_jsobject::{JsBoolean, JsObject, JsString};

use crate::color::ColorProperty;

/// The `title` option.
///
/// A title without any property set renders nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    pub text: Option<String>,
    pub show: Option<bool>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub text_align: Option<String>,
    pub text_color: ColorProperty,
    pub escape_html: Option<bool>,
}

impl Title {
    /// A title with the given text and HTML escaping enabled.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            escape_html: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self.font_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_text_align(mut self, align: impl Into<String>) -> Self {
        self.text_align = Some(align.into());
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = ColorProperty::css(color);
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        JsObject::builder("title")
            .property("text", JsString::from(self.text.clone()))
            .property("show", JsBoolean::create(self.show))
            .property("fontFamily", JsString::from(self.font_family.clone()))
            .property("fontSize", JsString::from(self.font_size.clone()))
            .property("textAlign", JsString::from(self.text_align.clone()))
            .property("textColor", self.text_color.to_js())
            .property("escapeHtml", JsBoolean::create(self.escape_html))
            .build()
    }

    pub fn to_notation(&self) -> Option<String> {
        self.to_js_object().to_notation()
    }
}
