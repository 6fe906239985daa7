//! Highlighter plugin and its tooltip content hook.

use cui_jsobject::{JsBoolean, JsDouble, JsInteger, JsObject, JsReference, JsString};

use crate::hook::PlotHookFunctionProvider;
use crate::legend::Location;
use crate::plugin::PluginConsumer;

const HIGHLIGHTER_PLUGIN: &str = "jqplot.highlighter.min.js";
const TOOLTIP_EDITOR_NAME: &str = "tooltipContentEditor";

/// Speed of the tooltip fade animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadeSpeed {
    Slow,
    Default,
    Fast,
}

impl FadeSpeed {
    pub fn constant(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Default => "def",
            Self::Fast => "fast",
        }
    }
}

/// Which axis values the tooltip shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TooltipAxes {
    X,
    Y,
    XY,
    YX,
    Both,
}

impl TooltipAxes {
    pub fn constant(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::XY => "xy",
            Self::YX => "yx",
            Self::Both => "both",
        }
    }
}

/// A client-side function that builds the tooltip text.
///
/// The highlighter references the function by name and the function itself
/// is emitted after the plot call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContentEditor {
    function_name: String,
    body: String,
}

impl Default for TooltipContentEditor {
    fn default() -> Self {
        Self {
            function_name: TOOLTIP_EDITOR_NAME.to_string(),
            body: "return \"\";".to_string(),
        }
    }
}

impl TooltipContentEditor {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }
}

impl PlotHookFunctionProvider for TooltipContentEditor {
    fn identifier(&self) -> &str {
        "tooltipContentEditor_hook"
    }

    fn hook_function_code(&self) -> String {
        format!(
            "function {}(str,seriesIndex,pointIndex,plot){{{}}};",
            self.function_name, self.body
        )
    }
}

/// The `highlighter` option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlighter {
    pub show: Option<bool>,
    pub show_marker: Option<bool>,
    pub line_width_adjust: Option<f64>,
    pub size_adjust: Option<f64>,
    pub show_tooltip: Option<bool>,
    pub tooltip_location: Option<Location>,
    pub fade_tooltip: Option<bool>,
    pub tooltip_fade_speed: Option<FadeSpeed>,
    pub tooltip_offset: Option<f64>,
    pub tooltip_axes: Option<TooltipAxes>,
    pub use_axes_formatters: Option<bool>,
    pub tooltip_format_string: Option<String>,
    pub format_string: Option<String>,
    pub yvalues: Option<i64>,
    pub bring_series_to_front: Option<bool>,
    tooltip_content_editor: Option<TooltipContentEditor>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    #[must_use]
    pub fn with_tooltip_location(mut self, location: Location) -> Self {
        self.tooltip_location = Some(location);
        self
    }

    #[must_use]
    pub fn with_tooltip_axes(mut self, axes: TooltipAxes) -> Self {
        self.tooltip_axes = Some(axes);
        self
    }

    #[must_use]
    pub fn with_fade(mut self, speed: FadeSpeed) -> Self {
        self.fade_tooltip = Some(true);
        self.tooltip_fade_speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_tooltip_content_editor(mut self, editor: TooltipContentEditor) -> Self {
        self.tooltip_content_editor = Some(editor);
        self
    }

    /// The tooltip editor, created with an empty body on first access.
    pub fn tooltip_content_editor(&mut self) -> &mut TooltipContentEditor {
        self.tooltip_content_editor.get_or_insert_with(TooltipContentEditor::default)
    }

    pub fn to_js_object(&self) -> JsObject {
        JsObject::builder("highlighter")
            .property("show", JsBoolean::create(self.show))
            .property("showMarker", JsBoolean::create(self.show_marker))
            .property("lineWidthAdjust", JsDouble::create(self.line_width_adjust))
            .property("sizeAdjust", JsDouble::create(self.size_adjust))
            .property("showTooltip", JsBoolean::create(self.show_tooltip))
            .property(
                "tooltipLocation",
                JsString::from(self.tooltip_location.map(Location::constant)),
            )
            .property("fadeTooltip", JsBoolean::create(self.fade_tooltip))
            .property(
                "tooltipFadeSpeed",
                JsString::from(self.tooltip_fade_speed.map(FadeSpeed::constant)),
            )
            .property("tooltipOffset", JsDouble::create(self.tooltip_offset))
            .property(
                "tooltipAxes",
                JsString::from(self.tooltip_axes.map(TooltipAxes::constant)),
            )
            .property(
                "useAxesFormatters",
                JsBoolean::create(self.use_axes_formatters),
            )
            .property(
                "tooltipFormatString",
                JsString::from(self.tooltip_format_string.clone()),
            )
            .property("formatString", JsString::from(self.format_string.clone()))
            .property("yvalues", JsInteger::create(self.yvalues))
            .property(
                "bringSeriesToFront",
                JsBoolean::create(self.bring_series_to_front),
            )
            .property(
                "tooltipContentEditor",
                self.tooltip_content_editor
                    .as_ref()
                    .map(|editor| JsReference::new(editor.function_name())),
            )
            .build()
    }
}

impl PluginConsumer for Highlighter {
    fn used_plugins(&self) -> Vec<String> {
        vec![HIGHLIGHTER_PLUGIN.to_string()]
    }
}

impl PlotHookFunctionProvider for Highlighter {
    fn identifier(&self) -> &str {
        "highlighter_hook"
    }

    fn hook_function_code(&self) -> String {
        self.tooltip_content_editor
            .as_ref()
            .map(PlotHookFunctionProvider::hook_function_code)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_is_referenced_and_emitted() {
        let mut highlighter = Highlighter::new();
        highlighter.tooltip_content_editor();
        assert_eq!(
            highlighter.to_js_object().to_notation().as_deref(),
            Some("highlighter: {tooltipContentEditor:tooltipContentEditor}")
        );
        assert_eq!(
            highlighter.hook_function_code(),
            "function tooltipContentEditor(str,seriesIndex,pointIndex,plot){return \"\";};"
        );
    }

    #[test]
    fn no_editor_no_hook_code() {
        let highlighter = Highlighter::new().with_show(true);
        assert!(highlighter.hook_function_code().is_empty());
        assert_eq!(highlighter.used_plugins(), vec!["jqplot.highlighter.min.js"]);
    }

    #[test]
    fn tooltip_settings_render_constants() {
        let highlighter = Highlighter::new()
            .with_tooltip_location(Location::SouthWest)
            .with_tooltip_axes(TooltipAxes::Y)
            .with_fade(FadeSpeed::Fast);
        assert_eq!(
            highlighter.to_js_object().to_notation().as_deref(),
            Some(
                r#"highlighter: {tooltipLocation:"sw",fadeTooltip:true,tooltipFadeSpeed:"fast",tooltipAxes:"y"}"#
            )
        );
    }
}
