use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ChartAdapter, PluginEvent};

impl<R: Renderer> ChartAdapter<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport,
            labels_len: self.state.labels().len(),
            series_len: self.state.series_len(),
            legend_displayed: self.options.legend_displayed(),
            render_count: self.render_count,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
