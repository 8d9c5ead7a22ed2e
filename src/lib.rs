//! metric-chart: a line-chart adapter over a pluggable rendering backend.
//!
//! A [`ChartAdapter`] owns one renderer and the chart state it draws. It is
//! built once from labels and series, then fed new data either by full
//! replacement ([`ChartAdapter::update`]) or by appending to the existing
//! series ([`ChartAdapter::update_incremental`]).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod registry;
pub mod render;
pub mod telemetry;

pub use api::{ChartAdapter, ChartKind, ChartOptions};
pub use crate::core::{ChartState, DEFAULT_BORDER_COLOR, Series};
pub use error::{ChartError, ChartResult};
