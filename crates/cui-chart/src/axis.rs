//! Axes, their renderers and tick options.

use std::fmt;

use cui_jsobject::{
    JsBoolean, JsDateTime, JsDouble, JsInteger, JsObject, JsReference, JsString, JsValue,
};

use crate::color::ColorProperty;
use crate::plugin::{PluginConsumer, PluginSupport};

/// The four axes a plot can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisType {
    XAxis,
    YAxis,
    X2Axis,
    Y2Axis,
}

impl AxisType {
    pub fn axis_name(self) -> &'static str {
        match self {
            Self::XAxis => "xaxis",
            Self::YAxis => "yaxis",
            Self::X2Axis => "x2axis",
            Self::Y2Axis => "y2axis",
        }
    }

    pub fn is_x(self) -> bool {
        matches!(self, Self::XAxis | Self::X2Axis)
    }

    pub fn is_y(self) -> bool {
        !self.is_x()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let axis = match name {
            "xaxis" => Self::XAxis,
            "yaxis" => Self::YAxis,
            "x2axis" => Self::X2Axis,
            "y2axis" => Self::Y2Axis,
            _ => return None,
        };
        Some(axis)
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.axis_name())
    }
}

/// Renderer drawing the axis itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisRenderer {
    Date,
    Category,
}

impl AxisRenderer {
    pub fn reference(self) -> &'static str {
        match self {
            Self::Date => "$.jqplot.DateAxisRenderer",
            Self::Category => "$.jqplot.CategoryAxisRenderer",
        }
    }

    pub fn plugin(self) -> &'static str {
        match self {
            Self::Date => "jqplot.dateAxisRenderer.min.js",
            Self::Category => "jqplot.categoryAxisRenderer.min.js",
        }
    }
}

/// Renderer for tick labels; canvas ticks can be rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisTickRenderer {
    Canvas,
}

impl AxisTickRenderer {
    pub fn reference(self) -> &'static str {
        match self {
            Self::Canvas => "$.jqplot.CanvasAxisTickRenderer",
        }
    }

    pub fn plugins(self) -> [&'static str; 2] {
        match self {
            Self::Canvas => [
                "jqplot.canvasTextRenderer.min.js",
                "jqplot.canvasAxisTickRenderer.min.js",
            ],
        }
    }
}

/// Minimum / maximum of an axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisBound {
    Number(f64),
    Integer(i64),
    Text(String),
    DateTime(JsDateTime),
}

impl AxisBound {
    fn to_js(&self) -> Box<dyn JsValue> {
        match self {
            Self::Number(value) => Box::new(JsDouble::new(*value)),
            Self::Integer(value) => Box::new(JsInteger::new(*value)),
            Self::Text(value) => Box::new(JsString::new(value.as_str())),
            Self::DateTime(value) => Box::new(*value),
        }
    }
}

/// The `tickOptions` of an axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOptions {
    pub show: Option<bool>,
    pub show_gridline: Option<bool>,
    pub show_mark: Option<bool>,
    pub format_string: Option<String>,
    pub angle: Option<i64>,
    pub font_size: Option<String>,
    pub text_color: ColorProperty,
}

impl TickOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format_string(mut self, format: impl Into<String>) -> Self {
        self.format_string = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle: i64) -> Self {
        self.angle = Some(angle);
        self
    }

    #[must_use]
    pub fn with_show_gridline(mut self, show: bool) -> Self {
        self.show_gridline = Some(show);
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        JsObject::builder("tickOptions")
            .property("show", JsBoolean::create(self.show))
            .property("showGridline", JsBoolean::create(self.show_gridline))
            .property("showMark", JsBoolean::create(self.show_mark))
            .property("formatString", JsString::from(self.format_string.clone()))
            .property("angle", JsInteger::create(self.angle))
            .property("fontSize", JsString::from(self.font_size.clone()))
            .property("textColor", self.text_color.to_js())
            .build()
    }
}

/// A single axis. The node name is the axis type.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    axis_type: AxisType,
    pub renderer: Option<AxisRenderer>,
    pub tick_renderer: Option<AxisTickRenderer>,
    label: Option<String>,
    pub tick_options: Option<TickOptions>,
    pub min: Option<AxisBound>,
    pub max: Option<AxisBound>,
    pub number_ticks: Option<i64>,
    pub tick_interval: Option<String>,
}

impl Axis {
    pub fn new(axis_type: AxisType) -> Self {
        Self {
            axis_type,
            renderer: None,
            tick_renderer: None,
            label: None,
            tick_options: None,
            min: None,
            max: None,
            number_ticks: None,
            tick_interval: None,
        }
    }

    pub fn x_axis() -> Self {
        Self::new(AxisType::XAxis)
    }

    pub fn y_axis() -> Self {
        Self::new(AxisType::YAxis)
    }

    pub fn x2_axis() -> Self {
        Self::new(AxisType::X2Axis)
    }

    pub fn y2_axis() -> Self {
        Self::new(AxisType::Y2Axis)
    }

    pub fn axis_type(&self) -> AxisType {
        self.axis_type
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets the label and shows it; a blank label removes both.
    pub fn set_label(&mut self, label: Option<&str>) {
        self.label = label
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string);
    }

    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.set_label(Some(label));
        self
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: AxisRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    #[must_use]
    pub fn with_tick_renderer(mut self, renderer: AxisTickRenderer) -> Self {
        self.tick_renderer = Some(renderer);
        self
    }

    #[must_use]
    pub fn with_tick_options(mut self, options: TickOptions) -> Self {
        self.tick_options = Some(options);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: AxisBound) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: AxisBound) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_number_ticks(mut self, count: i64) -> Self {
        self.number_ticks = Some(count);
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, interval: impl Into<String>) -> Self {
        self.tick_interval = Some(interval.into());
        self
    }

    pub fn to_js_object(&self) -> JsObject {
        JsObject::builder(self.axis_type.axis_name())
            .property(
                "renderer",
                self.renderer.map(|renderer| JsReference::new(renderer.reference())),
            )
            .property(
                "tickRenderer",
                self.tick_renderer
                    .map(|renderer| JsReference::new(renderer.reference())),
            )
            .property("label", JsString::from(self.label.clone()))
            .property("showLabel", self.label.as_ref().map(|_| JsBoolean::TRUE))
            .child_opt(self.tick_options.as_ref().map(TickOptions::to_js_object))
            .property("min", self.min.as_ref().map(AxisBound::to_js))
            .property("max", self.max.as_ref().map(AxisBound::to_js))
            .property("numberTicks", JsInteger::create(self.number_ticks))
            .property("tickInterval", JsString::from(self.tick_interval.clone()))
            .build()
    }
}

impl PluginConsumer for Axis {
    fn used_plugins(&self) -> Vec<String> {
        let mut plugins = PluginSupport::new();
        if let Some(renderer) = self.renderer {
            plugins.add_file(renderer.plugin());
        }
        if let Some(renderer) = self.tick_renderer {
            for plugin in renderer.plugins() {
                plugins.add_file(plugin);
            }
        }
        plugins.into_plugins()
    }
}

/// The `axes` option holding up to one axis per [`AxisType`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    axes: Vec<Axis>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the axis, replacing an earlier one of the same type.
    pub fn add(&mut self, axis: Axis) -> &mut Self {
        self.axes.retain(|known| known.axis_type != axis.axis_type);
        self.axes.push(axis);
        self.axes.sort_by_key(Axis::axis_type);
        self
    }

    #[must_use]
    pub fn with(mut self, axis: Axis) -> Self {
        self.add(axis);
        self
    }

    pub fn get(&self, axis_type: AxisType) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.axis_type == axis_type)
    }

    pub fn get_mut(&mut self, axis_type: AxisType) -> Option<&mut Axis> {
        self.axes.iter_mut().find(|axis| axis.axis_type == axis_type)
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn to_js_object(&self) -> JsObject {
        self.axes
            .iter()
            .fold(JsObject::builder("axes"), |builder, axis| {
                builder.child(axis.to_js_object())
            })
            .build()
    }
}

impl PluginConsumer for Axes {
    fn used_plugins(&self) -> Vec<String> {
        let mut plugins = PluginSupport::new();
        for axis in &self.axes {
            plugins.add(axis);
        }
        plugins.into_plugins()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn label_implies_show_label() {
        let axes = Axes::new().with(Axis::x_axis().with_label("Any axis"));
        assert_eq!(
            axes.to_js_object().to_notation().as_deref(),
            Some(r#"axes: {xaxis: {label:"Any axis",showLabel:true}}"#)
        );
        assert!(axes.used_plugins().is_empty());
    }

    #[test]
    fn blank_label_clears() {
        let mut axis = Axis::y_axis().with_label("Count");
        axis.set_label(Some("  "));
        assert_eq!(axis.label(), None);
        assert_eq!(axis.to_js_object().to_notation(), None);
    }

    #[test]
    fn axes_render_in_axis_order_and_replace_by_type() {
        let axes = Axes::new()
            .with(Axis::y2_axis().with_number_ticks(3))
            .with(Axis::x_axis().with_label("old"))
            .with(Axis::x_axis().with_label("new"));
        assert_eq!(
            axes.to_js_object().to_notation().as_deref(),
            Some(r#"axes: {xaxis: {label:"new",showLabel:true},y2axis: {numberTicks:3}}"#)
        );
    }

    #[test]
    fn date_axis_with_ticks_and_bounds() {
        let day = NaiveDate::from_ymd_opt(2015, 10, 30).unwrap();
        let axis = Axis::x_axis()
            .with_renderer(AxisRenderer::Date)
            .with_tick_renderer(AxisTickRenderer::Canvas)
            .with_tick_options(TickOptions::new().with_format_string("%b %#d").with_angle(-30))
            .with_min(AxisBound::DateTime(JsDateTime::from_date(day)))
            .with_max(AxisBound::Number(100.0))
            .with_tick_interval("1 day");
        assert_eq!(
            axis.to_js_object().to_notation().as_deref(),
            Some(
                r#"xaxis: {renderer:$.jqplot.DateAxisRenderer,tickRenderer:$.jqplot.CanvasAxisTickRenderer,tickOptions: {formatString:"%b %#d",angle:-30},min:"2015-10-30",max:100.000,tickInterval:"1 day"}"#
            )
        );
        assert_eq!(
            axis.used_plugins(),
            vec![
                "jqplot.dateAxisRenderer.min.js",
                "jqplot.canvasTextRenderer.min.js",
                "jqplot.canvasAxisTickRenderer.min.js",
            ]
        );
    }

    #[test]
    fn axis_names_round_trip() {
        for axis in [AxisType::XAxis, AxisType::YAxis, AxisType::X2Axis, AxisType::Y2Axis] {
            assert_eq!(AxisType::from_name(axis.axis_name()), Some(axis));
        }
        assert!(AxisType::X2Axis.is_x());
        assert!(AxisType::Y2Axis.is_y());
    }
}
