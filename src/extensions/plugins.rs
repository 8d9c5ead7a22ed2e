use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub labels_len: usize,
    pub series_len: usize,
    pub legend_displayed: bool,
    pub render_count: u64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataReplaced {
        labels_len: usize,
        series_len: usize,
    },
    DataAppended {
        labels_appended: usize,
        points_appended: usize,
    },
    Rendered {
        render_count: u64,
    },
}

/// Observer hook for chart data and draw activity.
///
/// Plugins see events and a context snapshot; they never get mutable access
/// to chart state.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
