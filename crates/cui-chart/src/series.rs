//! Series options: `seriesDefaults` and the per-series list entries.

use cui_jsobject::{JsBoolean, JsDouble, JsInteger, JsObject, JsReference, JsString, JsValue};

use crate::axis::AxisType;
use crate::color::ColorProperty;
use crate::decoration::{Shadow, ShadowDecoration};
use crate::error::{ChartError, Result};
use crate::plugin::PluginConsumer;

const BAR_RENDERER: &str = "$.jqplot.BarRenderer";
const BAR_RENDERER_PLUGIN: &str = "jqplot.barRenderer.min.js";

/// Orientation of bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarDirection {
    Vertical,
    Horizontal,
}

impl BarDirection {
    pub fn constant(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// `rendererOptions` of the bar renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarRendererOptions {
    pub bar_padding: Option<i64>,
    pub bar_margin: Option<i64>,
    pub bar_direction: Option<BarDirection>,
    pub bar_width: Option<f64>,
    pub waterfall: Option<bool>,
    pub groups: Option<i64>,
    pub vary_bar_color: Option<bool>,
    pub highlight_colors: Vec<String>,
    pub highlight_mouse_over: Option<bool>,
    pub highlight_mouse_down: Option<bool>,
    pub shadow: Shadow,
}

impl BarRendererOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bar_direction(mut self, direction: BarDirection) -> Self {
        self.bar_direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_bar_padding(mut self, padding: i64) -> Self {
        self.bar_padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_vary_bar_color(mut self, vary: bool) -> Self {
        self.vary_bar_color = Some(vary);
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_colors.push(color.into());
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        let highlight_colors = (!self.highlight_colors.is_empty()).then(|| {
            self.highlight_colors
                .iter()
                .map(|color| JsString::new(color.as_str()))
                .collect::<cui_jsobject::JsArray<JsString>>()
        });
        let builder = JsObject::builder("rendererOptions")
            .property("barPadding", JsInteger::create(self.bar_padding))
            .property("barMargin", JsInteger::create(self.bar_margin))
            .property(
                "barDirection",
                JsString::from(self.bar_direction.map(BarDirection::constant)),
            )
            .property("barWidth", JsDouble::create(self.bar_width))
            .property("waterfall", JsBoolean::create(self.waterfall))
            .property("groups", JsInteger::create(self.groups))
            .property("varyBarColor", JsBoolean::create(self.vary_bar_color))
            .property("highlightColors", highlight_colors)
            .property(
                "highlightMouseOver",
                JsBoolean::create(self.highlight_mouse_over),
            )
            .property(
                "highlightMouseDown",
                JsBoolean::create(self.highlight_mouse_down),
            );
        self.shadow.decorate(builder).build()
    }
}

impl ShadowDecoration for BarRendererOptions {
    fn shadow_mut(&mut self) -> &mut Shadow {
        &mut self.shadow
    }
}

/// Shape of the point markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointStyle {
    Circle,
    FilledCircle,
    Diamond,
    FilledDiamond,
    Square,
    FilledSquare,
    Dash,
    Plus,
    X,
}

impl PointStyle {
    pub fn constant(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::FilledCircle => "filledCircle",
            Self::Diamond => "diamond",
            Self::FilledDiamond => "filledDiamond",
            Self::Square => "square",
            Self::FilledSquare => "filledSquare",
            Self::Dash => "dash",
            Self::Plus => "plus",
            Self::X => "x",
        }
    }
}

/// The `markerOptions` of a series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerOptions {
    pub style: Option<PointStyle>,
    pub line_width: Option<f64>,
    pub size: Option<f64>,
    pub color: ColorProperty,
    pub shadow: Shadow,
}

impl MarkerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: PointStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        let builder = JsObject::builder("markerOptions")
            .property("style", JsString::from(self.style.map(PointStyle::constant)))
            .property("lineWidth", JsDouble::create(self.line_width))
            .property("size", JsDouble::create(self.size))
            .property("color", self.color.to_js());
        self.shadow.decorate(builder).build()
    }
}

impl ShadowDecoration for MarkerOptions {
    fn shadow_mut(&mut self) -> &mut Shadow {
        &mut self.shadow
    }
}

/// Options of one series, or of all series when used as `seriesDefaults`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    as_defaults: bool,
    pub show: Option<bool>,
    pub label: Option<String>,
    pub show_label: Option<bool>,
    pub color: ColorProperty,
    pub line_width: Option<f64>,
    pub show_line: Option<bool>,
    pub show_marker: Option<bool>,
    pub fill: Option<bool>,
    pub fill_to_zero: Option<bool>,
    pub break_on_null: Option<bool>,
    pub bar_renderer: Option<BarRendererOptions>,
    pub marker_options: Option<MarkerOptions>,
    pub shadow: Shadow,
    xaxis: Option<AxisType>,
    yaxis: Option<AxisType>,
}

impl Series {
    /// Rendered as the named `seriesDefaults` node.
    pub fn defaults() -> Self {
        Self {
            as_defaults: true,
            ..Self::default()
        }
    }

    /// Rendered as an anonymous element of the `series` list.
    pub fn list_element() -> Self {
        Self::default()
    }

    pub fn is_defaults(&self) -> bool {
        self.as_defaults
    }

    /// Binds the series to an x axis. `None` removes the binding.
    pub fn set_xaxis(&mut self, axis: Option<AxisType>) -> Result<&mut Self> {
        if let Some(axis) = axis.filter(|axis| !axis.is_x()) {
            return Err(ChartError::AxisMismatch {
                axis,
                expected: "x",
            });
        }
        self.xaxis = axis;
        Ok(self)
    }

    /// Binds the series to a y axis. `None` removes the binding.
    pub fn set_yaxis(&mut self, axis: Option<AxisType>) -> Result<&mut Self> {
        if let Some(axis) = axis.filter(|axis| !axis.is_y()) {
            return Err(ChartError::AxisMismatch {
                axis,
                expected: "y",
            });
        }
        self.yaxis = axis;
        Ok(self)
    }

    pub fn xaxis(&self) -> Option<AxisType> {
        self.xaxis
    }

    pub fn yaxis(&self) -> Option<AxisType> {
        self.yaxis
    }

    /// `Some` sets the colour, `None` makes the series transparent.
    pub fn set_color(&mut self, color: Option<&str>) -> &mut Self {
        self.color.set(color);
        self
    }

    pub fn set_line_width(&mut self, width: Option<f64>) -> &mut Self {
        self.line_width = width;
        self
    }

    pub fn set_show_line(&mut self, show: Option<bool>) -> &mut Self {
        self.show_line = show;
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Draws the series as bars.
    pub fn set_bar_renderer(&mut self, options: BarRendererOptions) -> &mut Self {
        self.bar_renderer = Some(options);
        self
    }

    pub fn set_marker_options(&mut self, options: MarkerOptions) -> &mut Self {
        self.marker_options = Some(options);
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        let builder = JsObject::builder("seriesDefaults")
            .property("breakOnNull", JsBoolean::create(self.break_on_null))
            .property("color", self.color.to_js())
            .property("fill", JsBoolean::create(self.fill))
            .property("fillToZero", JsBoolean::create(self.fill_to_zero))
            .property("label", JsString::from(self.label.clone()))
            .property("lineWidth", JsDouble::create(self.line_width))
            .property(
                "renderer",
                self.bar_renderer
                    .as_ref()
                    .map(|_| JsReference::new(BAR_RENDERER)),
            )
            .child_opt(
                self.bar_renderer
                    .as_ref()
                    .map(BarRendererOptions::to_js_object),
            )
            .child_opt(self.marker_options.as_ref().map(MarkerOptions::to_js_object));
        self.shadow
            .decorate(builder)
            .property("showLabel", JsBoolean::create(self.show_label))
            .property("showMarker", JsBoolean::create(self.show_marker))
            .property("show", JsBoolean::create(self.show))
            .property("xaxis", JsString::from(self.xaxis.map(AxisType::axis_name)))
            .property("yaxis", JsString::from(self.yaxis.map(AxisType::axis_name)))
            .property("showLine", JsBoolean::create(self.show_line))
            .build()
    }

    /// `seriesDefaults: {...}` for defaults, `{...}` for list elements.
    pub fn to_notation(&self) -> Option<String> {
        let object = self.to_js_object();
        if self.as_defaults {
            object.to_notation()
        } else {
            object.value_as_string()
        }
    }
}

impl ShadowDecoration for Series {
    fn shadow_mut(&mut self) -> &mut Shadow {
        &mut self.shadow
    }
}

impl PluginConsumer for Series {
    fn used_plugins(&self) -> Vec<String> {
        match self.bar_renderer {
            Some(_) => vec![BAR_RENDERER_PLUGIN.to_string()],
            None => Vec::new(),
        }
    }
}
