//! The `$.jqplot(...)` call.

use cui_jsobject::{JsString, JsValue};
use tracing::debug;

use crate::data::SeriesData;
use crate::error::{ChartError, Result};
use crate::hook::{HookFunctionsManager, PlotHookFunctionProvider};
use crate::options::Options;
use crate::plugin::{PluginConsumer, PluginSupport};

const PLOT_FUNCTION: &str = "$.jqplot";
const NOTHING_TO_DISPLAY: &str = "'';";

/// A complete plot: target element, data, options and hooks.
#[derive(Debug)]
pub struct JqPlot {
    chart_id: String,
    data: SeriesData,
    options: Option<Options>,
    nothing_to_display: bool,
    hooks: HookFunctionsManager,
}

impl JqPlot {
    /// A plot without options. Empty data means there is nothing to display.
    pub fn new(chart_id: impl Into<String>, data: SeriesData) -> Result<Self> {
        let chart_id = chart_id.into();
        if chart_id.trim().is_empty() {
            return Err(ChartError::EmptyChartId);
        }
        let nothing_to_display = data.is_empty();
        Ok(Self {
            chart_id,
            data,
            options: None,
            nothing_to_display,
            hooks: HookFunctionsManager::new(),
        })
    }

    pub fn with_options(chart_id: impl Into<String>, data: SeriesData, options: Options) -> Result<Self> {
        let mut plot = Self::new(chart_id, data)?;
        plot.options = Some(options);
        Ok(plot)
    }

    pub fn builder() -> JqPlotBuilder {
        JqPlotBuilder::default()
    }

    pub fn chart_id(&self) -> &str {
        &self.chart_id
    }

    pub fn options(&self) -> Option<&Options> {
        self.options.as_ref()
    }

    pub fn is_nothing_to_display(&self) -> bool {
        self.nothing_to_display
    }

    pub fn set_nothing_to_display(&mut self, value: bool) -> &mut Self {
        self.nothing_to_display = value;
        self
    }

    pub fn add_hook_function(&mut self, hook: &dyn PlotHookFunctionProvider) -> &mut Self {
        self.hooks.add_hook_function(hook);
        self
    }

    /// Script body: the plot call followed by hook code, or `'';` when
    /// there is nothing to display.
    pub fn to_notation(&self) -> String {
        if self.nothing_to_display {
            debug!(chart = %self.chart_id, "nothing to display");
            return NOTHING_TO_DISPLAY.to_string();
        }
        let target = JsString::new(self.chart_id.as_str())
            .value_as_string()
            .unwrap_or_default();
        let options = self
            .options
            .as_ref()
            .and_then(Options::to_notation)
            .unwrap_or_else(|| "null".to_string());
        let mut script = format!(
            "{PLOT_FUNCTION}({target}, {}, {options});",
            self.data.to_notation()
        );
        if let Some(options) = &self.options {
            script.push_str(&options.hook_function_code());
        }
        script.push_str(&self.hooks.hooks_function_code());
        debug!(chart = %self.chart_id, series = self.data.len(), "rendered plot");
        script
    }
}

impl PluginConsumer for JqPlot {
    /// Empty when there is nothing to display.
    fn used_plugins(&self) -> Vec<String> {
        if self.nothing_to_display {
            return Vec::new();
        }
        let mut plugins = PluginSupport::new();
        plugins.add(&self.options);
        plugins.into_plugins()
    }
}

/// Step-wise assembly of a [`JqPlot`].
#[derive(Debug, Default)]
pub struct JqPlotBuilder {
    chart_id: Option<String>,
    data: Option<SeriesData>,
    options: Option<Options>,
}

impl JqPlotBuilder {
    /// Sets the target element id; it can be set only once.
    pub fn use_chart_id(&mut self, chart_id: &str) -> Result<&mut Self> {
        let trimmed = chart_id.trim();
        if trimmed.is_empty() {
            return Err(ChartError::EmptyChartId);
        }
        if let Some(existing) = &self.chart_id {
            return Err(ChartError::ChartIdAlreadyDefined(existing.clone()));
        }
        self.chart_id = Some(trimmed.to_string());
        Ok(self)
    }

    /// The series data, created empty on first access.
    pub fn use_data(&mut self) -> &mut SeriesData {
        self.data.get_or_insert_with(SeriesData::default)
    }

    /// The options, created empty on first access.
    pub fn use_options(&mut self) -> &mut Options {
        self.options.get_or_insert_with(Options::default)
    }

    pub fn build(self) -> Result<JqPlot> {
        let chart_id = self.chart_id.ok_or(ChartError::MissingChartId)?;
        let data = self.data.ok_or(ChartError::MissingData)?;
        match self.options {
            Some(options) => JqPlot::with_options(chart_id, data, options),
            None => JqPlot::new(chart_id, data),
        }
    }
}
