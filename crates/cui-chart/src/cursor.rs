//! Cursor plugin: pointer tracking and zooming.

use cui_jsobject::{JsBoolean, JsObject, JsString};

use crate::plugin::PluginConsumer;

const CURSOR_PLUGIN: &str = "jqplot.cursor.min.js";

/// Axis a zoom is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomConstraint {
    None,
    X,
    Y,
}

impl ZoomConstraint {
    pub fn constant(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// The `cursor` option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub show: Option<bool>,
    pub show_tooltip: Option<bool>,
    pub follow_mouse: Option<bool>,
    pub zoom: Option<bool>,
    pub loose_zoom: Option<bool>,
    pub constrain_zoom_to: Option<ZoomConstraint>,
    pub dbl_click_reset: Option<bool>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    #[must_use]
    pub fn with_show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = Some(show);
        self
    }

    /// Enables zooming, optionally restricted to one axis.
    #[must_use]
    pub fn with_zoom(mut self, constraint: Option<ZoomConstraint>) -> Self {
        self.zoom = Some(true);
        self.constrain_zoom_to = constraint;
        self
    }

    #[must_use]
    pub fn with_loose_zoom(mut self, loose: bool) -> Self {
        self.loose_zoom = Some(loose);
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        JsObject::builder("cursor")
            .property("show", JsBoolean::create(self.show))
            .property("showTooltip", JsBoolean::create(self.show_tooltip))
            .property("followMouse", JsBoolean::create(self.follow_mouse))
            .property("zoom", JsBoolean::create(self.zoom))
            .property("looseZoom", JsBoolean::create(self.loose_zoom))
            .property(
                "constrainZoomTo",
                JsString::from(self.constrain_zoom_to.map(ZoomConstraint::constant)),
            )
            .property("dblClickReset", JsBoolean::create(self.dbl_click_reset))
            .build()
    }
}

impl PluginConsumer for Cursor {
    fn used_plugins(&self) -> Vec<String> {
        vec![CURSOR_PLUGIN.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_with_constraint() {
        let cursor = Cursor::new()
            .with_show(true)
            .with_zoom(Some(ZoomConstraint::X))
            .with_loose_zoom(true);
        assert_eq!(
            cursor.to_js_object().to_notation().as_deref(),
            Some(r#"cursor: {show:true,zoom:true,looseZoom:true,constrainZoomTo:"x"}"#)
        );
    }

    #[test]
    fn empty_cursor_is_absent_but_needs_plugin() {
        assert_eq!(Cursor::new().to_js_object().to_notation(), None);
        assert_eq!(Cursor::new().used_plugins(), vec!["jqplot.cursor.min.js"]);
    }
}
