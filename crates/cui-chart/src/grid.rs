//! Plot grid options.

use cui_jsobject::{JsBoolean, JsDouble, JsObject};

use crate::color::ColorProperty;
use crate::decoration::{Shadow, ShadowDecoration};

const DEFAULT_GRID_LINE_COLOR: &str = "#cccccc";
const DEFAULT_BORDER_WIDTH: f64 = 2.0;

/// The `grid` option: the area the series are drawn on.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub draw_grid_lines: bool,
    pub grid_line_color: ColorProperty,
    pub background: ColorProperty,
    pub border_color: ColorProperty,
    pub border_width: f64,
    pub shadow: Shadow,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            draw_grid_lines: true,
            grid_line_color: ColorProperty::css(DEFAULT_GRID_LINE_COLOR),
            background: ColorProperty::Unset,
            border_color: ColorProperty::Unset,
            border_width: DEFAULT_BORDER_WIDTH,
            shadow: Shadow::default(),
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_draw_grid_lines(mut self, value: bool) -> Self {
        self.draw_grid_lines = value;
        self
    }

    #[must_use]
    pub fn with_grid_line_color(mut self, color: Option<&str>) -> Self {
        self.grid_line_color.set(color);
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: Option<&str>) -> Self {
        self.background.set(color);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Option<&str>) -> Self {
        self.border_color.set(color);
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        let builder = JsObject::builder("grid")
            .property("drawGridLines", JsBoolean::from(self.draw_grid_lines))
            .property("gridLineColor", self.grid_line_color.to_js())
            .property("background", self.background.to_js())
            .property("borderColor", self.border_color.to_js())
            .property("borderWidth", JsDouble::new(self.border_width));
        self.shadow.decorate(builder).build()
    }

    pub fn to_notation(&self) -> Option<String> {
        self.to_js_object().to_notation()
    }
}

impl ShadowDecoration for Grid {
    fn shadow_mut(&mut self) -> &mut Shadow {
        &mut self.shadow
    }
}
