//! Error types for chart configuration.

use thiserror::Error;

use crate::axis::AxisType;

/// Errors raised while assembling a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// A series was bound to an axis of the wrong orientation.
    #[error("{axis} is not a valid {expected} axis")]
    AxisMismatch {
        axis: AxisType,
        expected: &'static str,
    },

    #[error("chart id must not be empty")]
    EmptyChartId,

    #[error("chart id already defined as '{0}'")]
    ChartIdAlreadyDefined(String),

    #[error("chart id must be defined before building the plot")]
    MissingChartId,

    #[error("series data must be defined before building the plot")]
    MissingData,
}

/// Result type alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
