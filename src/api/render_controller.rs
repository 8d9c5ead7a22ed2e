use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartAdapter, PluginEvent, build_render_frame};

impl<R: Renderer> ChartAdapter<R> {
    /// Materializes the current state into a frame and hands it to the
    /// renderer.
    pub fn redraw(&mut self) -> ChartResult<()> {
        let frame = build_render_frame(&self.state, &self.options, self.viewport)?;
        self.present(&frame)
    }

    pub(super) fn present(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.renderer.render(frame)?;
        self.render_count += 1;
        self.emit_plugin_event(PluginEvent::Rendered {
            render_count: self.render_count,
        });
        Ok(())
    }

    /// Number of frames successfully handed to the renderer, including the
    /// initial draw.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}
