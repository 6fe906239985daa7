//! The options object passed as third argument of the plot call.

use cui_jsobject::{JsArray, JsObject};

use crate::axis::Axes;
use crate::cursor::Cursor;
use crate::grid::Grid;
use crate::highlighter::Highlighter;
use crate::hook::PlotHookFunctionProvider;
use crate::legend::Legend;
use crate::plugin::{PluginConsumer, PluginSupport};
use crate::series::Series;
use crate::title::Title;

/// Root options object; rendered without a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub title: Option<Title>,
    pub axes: Option<Axes>,
    pub series_defaults: Option<Series>,
    series: Vec<Series>,
    pub cursor: Option<Cursor>,
    pub legend: Option<Legend>,
    pub highlighter: Option<Highlighter>,
    pub grid: Option<Grid>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = Some(axes);
        self
    }

    #[must_use]
    pub fn with_series_defaults(mut self, series: Series) -> Self {
        self.series_defaults = Some(series);
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Appends options for the next series in data order.
    pub fn add_seria_option(&mut self, series: Series) -> &mut Self {
        self.series.push(series);
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The axes, created empty on first access.
    pub fn axes_mut(&mut self) -> &mut Axes {
        self.axes.get_or_insert_with(Axes::default)
    }

    /// The highlighter, created empty on first access.
    pub fn highlighter_mut(&mut self) -> &mut Highlighter {
        self.highlighter.get_or_insert_with(Highlighter::default)
    }

    pub fn to_js_object(&self) -> JsObject {
        let series = (!self.series.is_empty()).then(|| {
            self.series
                .iter()
                .map(Series::to_js_object)
                .collect::<JsArray<JsObject>>()
        });
        JsObject::root_builder()
            .child_opt(self.title.as_ref().map(Title::to_js_object))
            .child_opt(self.axes.as_ref().map(Axes::to_js_object))
            .child_opt(self.series_defaults.as_ref().map(Series::to_js_object))
            .property("series", series)
            .child_opt(self.cursor.as_ref().map(Cursor::to_js_object))
            .child_opt(self.legend.as_ref().map(Legend::to_js_object))
            .child_opt(self.highlighter.as_ref().map(Highlighter::to_js_object))
            .child_opt(self.grid.as_ref().map(Grid::to_js_object))
            .build()
    }

    /// `{...}`, or `None` when no option carries a value.
    pub fn to_notation(&self) -> Option<String> {
        self.to_js_object().to_notation()
    }
}

impl PluginConsumer for Options {
    fn used_plugins(&self) -> Vec<String> {
        let mut plugins = PluginSupport::new();
        plugins.add(&self.axes).add(&self.series_defaults);
        for series in &self.series {
            plugins.add(series);
        }
        plugins
            .add(&self.cursor)
            .add(&self.legend)
            .add(&self.highlighter);
        plugins.into_plugins()
    }
}

impl PlotHookFunctionProvider for Options {
    fn identifier(&self) -> &str {
        "options_hook"
    }

    fn hook_function_code(&self) -> String {
        self.highlighter
            .as_ref()
            .map(PlotHookFunctionProvider::hook_function_code)
            .unwrap_or_default()
    }
}
