//! Optional hooks layered on top of the adapter.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
