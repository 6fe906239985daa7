//! JSON chart definitions rendered to a `$.jqplot(...)` script.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use cui_chart::{
    AxisRenderer, AxisType, Axis, BarRendererOptions, Cursor, Grid, Highlighter, JqPlot,
    JqPlotFunctionHook, Legend, Location, Options, PluginConsumer, Series, SeriesData,
    TimeLineSeria, Title, ZoomConstraint,
};
use cui_jsobject::JsDateTimeFormat;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a series is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
}

/// A dated value of a time line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub value: f64,
}

/// One series: plain values or dated points, not both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub kind: SeriesKind,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default)]
    pub points: Vec<TimePoint>,
    /// `yaxis` or `y2axis`.
    #[serde(default)]
    pub y_axis: Option<String>,
}

/// A chart as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub chart_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    /// Legend location constant such as `ne`; no legend when absent.
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub highlighter: bool,
    /// Enables zooming on the x axis with a double-click reset binding.
    #[serde(default)]
    pub zoom: bool,
    #[serde(default)]
    pub grid: bool,
    #[serde(default)]
    pub series: Vec<SeriesDefinition>,
}

/// The rendered script and the plugin files it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedChart {
    pub chart_id: String,
    pub script: String,
    pub plugins: Vec<String>,
}

pub fn parse_chart(json: &str) -> Result<ChartDefinition> {
    serde_json::from_str(json).context("parse chart definition")
}

pub fn render_chart(definition: &ChartDefinition) -> Result<RenderedChart> {
    let mut data = SeriesData::new();
    let mut options = Options::new();
    let mut has_time_line = false;

    for (index, series) in definition.series.iter().enumerate() {
        if !series.values.is_empty() && !series.points.is_empty() {
            bail!("series {index} has both values and points");
        }
        if series.points.is_empty() {
            data.add_values(series.values.iter().copied());
        } else {
            data.add_container(&time_line(&series.points)?);
            has_time_line = true;
        }
        options.add_seria_option(
            series_options(series, index).with_context(|| format!("series {index}"))?,
        );
    }

    if let Some(title) = &definition.title {
        options = options.with_title(Title::new(title.as_str()));
    }
    let mut x_axis = Axis::x_axis();
    if let Some(label) = &definition.x_label {
        x_axis.set_label(Some(label.as_str()));
    }
    if has_time_line {
        x_axis = x_axis.with_renderer(AxisRenderer::Date);
    }
    if x_axis != Axis::x_axis() {
        options.axes_mut().add(x_axis);
    }
    if let Some(label) = &definition.y_label {
        options.axes_mut().add(Axis::y_axis().with_label(label));
    }
    if let Some(location) = &definition.legend {
        let location = Location::from_constant(location)
            .with_context(|| format!("unknown legend location '{location}'"))?;
        options = options.with_legend(Legend::new().with_show(true).with_location(location));
    }
    if definition.highlighter {
        options = options.with_highlighter(Highlighter::new().with_show(true));
    }
    if definition.zoom {
        options = options.with_cursor(
            Cursor::new()
                .with_show(true)
                .with_zoom(Some(ZoomConstraint::X)),
        );
    }
    if definition.grid {
        options = options.with_grid(Grid::new());
    }

    let mut plot = JqPlot::with_options(definition.chart_id.as_str(), data, options)
        .context("create plot")?;
    if definition.zoom {
        plot.add_hook_function(&JqPlotFunctionHook::reset_zoom_event_binding(
            &definition.chart_id,
            "plot.resetZoom();",
        ));
    }
    debug!(chart = %definition.chart_id, series = definition.series.len(), "built chart");

    let rendered = RenderedChart {
        chart_id: definition.chart_id.clone(),
        script: plot.to_notation(),
        plugins: plot.used_plugins(),
    };
    info!(
        chart = %rendered.chart_id,
        plugins = rendered.plugins.len(),
        "rendered chart"
    );
    Ok(rendered)
}

fn time_line(points: &[TimePoint]) -> Result<TimeLineSeria<f64>> {
    let mut seria = TimeLineSeria::new(JsDateTimeFormat::DateOnly);
    for point in points {
        let day = NaiveDate::parse_from_str(&point.date, DATE_FORMAT)
            .with_context(|| format!("invalid date '{}'", point.date))?;
        seria.add_date(day, point.value);
    }
    Ok(seria)
}

/// Every series gets a label so that the options list stays aligned with
/// the data; an option object without properties would be dropped.
fn series_options(definition: &SeriesDefinition, index: usize) -> Result<Series> {
    let mut series = Series::list_element();
    match &definition.label {
        Some(label) => series.set_label(label.as_str()),
        None => series.set_label(format!("Series {}", index + 1)),
    };
    if let Some(color) = &definition.color {
        series.set_color(Some(color.as_str()));
    }
    if definition.kind == SeriesKind::Bar {
        series.set_bar_renderer(BarRendererOptions::new());
    }
    if let Some(name) = &definition.y_axis {
        let axis = AxisType::from_name(name)
            .with_context(|| format!("unknown axis '{name}'"))?;
        series.set_yaxis(Some(axis))?;
    }
    Ok(series)
}
