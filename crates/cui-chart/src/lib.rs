//! jqPlot chart configuration.
//!
//! Typed option objects (title, grid, legend, axes, series, highlighter,
//! cursor) that render through [`cui_jsobject`] into the options literal of a
//! `$.jqplot(...)` call. Every render builds a fresh object graph, so the
//! option structs stay plain, cloneable values.
//!
//! Each consumer also reports the client-side plugin scripts it requires
//! ([`PluginConsumer`]), and hook functions ([`PlotHookFunctionProvider`])
//! append script after the plot call.
//!
//! # Example
//!
//! ```
//! use cui_chart::{JqPlot, Options, PluginConsumer, SeriesData, Title};
//!
//! let mut data = SeriesData::new();
//! data.add_values([3, 7, 5]);
//! let options = Options::new().with_title(Title::new("Visits"));
//! let plot = JqPlot::with_options("chart", data, options).unwrap();
//!
//! assert_eq!(
//!     plot.to_notation(),
//!     r#"$.jqplot("chart", [[3,7,5]], {title: {text:"Visits",escapeHtml:true}});"#
//! );
//! assert!(plot.used_plugins().is_empty());
//! ```

mod axis;
mod color;
mod cursor;
mod data;
mod decoration;
mod error;
mod grid;
mod highlighter;
mod hook;
mod legend;
mod options;
mod plot;
mod plugin;
mod series;
mod title;

pub use axis::{AxisBound, AxisRenderer, AxisTickRenderer, AxisType, Axes, Axis, TickOptions};
pub use color::ColorProperty;
pub use cursor::{Cursor, ZoomConstraint};
pub use data::{ArrayContainer, SeriaValue, SeriesData, TimeLineSeria};
pub use decoration::{Shadow, ShadowDecoration};
pub use error::{ChartError, Result};
pub use grid::Grid;
pub use highlighter::{FadeSpeed, Highlighter, TooltipAxes, TooltipContentEditor};
pub use hook::{HookFunctionsManager, JqPlotFunctionHook, PlotHookFunctionProvider};
pub use legend::{Legend, Location, Placement};
pub use options::Options;
pub use plot::{JqPlot, JqPlotBuilder};
pub use plugin::{PluginConsumer, PluginSupport};
pub use series::{BarDirection, BarRendererOptions, MarkerOptions, PointStyle, Series};
pub use title::Title;
