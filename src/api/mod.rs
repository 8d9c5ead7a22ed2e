mod data_controller;
mod options;
mod plugin_dispatch;
mod plugin_registry;
mod render_controller;
mod render_frame_builder;
mod snapshot;

use tracing::debug;

use crate::core::{ChartState, Series, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::registry;
use crate::render::Renderer;

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
pub use options::{ChartKind, ChartOptions, LegendOptions, PluginOptions};
pub use render_frame_builder::build_render_frame;
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};

/// Line chart bound to exactly one renderer.
///
/// The adapter owns its render target for its whole lifetime; the state it
/// draws is only reachable through `&self`/`&mut self`, so callers are
/// serialized by the borrow checker.
pub struct ChartAdapter<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    state: ChartState,
    options: ChartOptions,
    plugins: Vec<Box<dyn ChartPlugin>>,
    render_count: u64,
}

impl<R: Renderer> ChartAdapter<R> {
    /// Builds the chart and draws it once.
    ///
    /// Fails with [`ChartError::RenderTarget`] when `renderer` has no usable
    /// surface, and with [`ChartError::LengthMismatch`] or
    /// [`ChartError::DuplicateSeries`] on malformed input. Every series is
    /// stroked with [`crate::DEFAULT_BORDER_COLOR`] whatever color it carried.
    pub fn new<L, S>(renderer: R, labels: L, series: Vec<Series>) -> ChartResult<Self>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let newly_registered = registry::ensure_registered();
        let options = ChartOptions::fixed();

        let viewport = renderer
            .surface()
            .ok_or_else(|| ChartError::RenderTarget {
                reason: "no drawing surface available".to_owned(),
            })?;
        if !viewport.is_valid() {
            return Err(ChartError::RenderTarget {
                reason: format!(
                    "drawing surface is empty ({}x{})",
                    viewport.width, viewport.height
                ),
            });
        }

        let state = ChartState::from_parts(collect_labels(labels), series)?;
        debug!(
            labels_len = state.labels().len(),
            series_len = state.series_len(),
            width = viewport.width,
            height = viewport.height,
            newly_registered,
            "construct chart adapter"
        );

        let mut adapter = Self {
            renderer,
            viewport,
            state,
            options,
            plugins: Vec::new(),
            render_count: 0,
        };
        adapter.redraw()?;
        Ok(adapter)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.state.labels()
    }

    pub fn series(&self) -> impl ExactSizeIterator<Item = &Series> + '_ {
        self.state.series()
    }

    #[must_use]
    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.state.series_by_label(label)
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn collect_labels<L, S>(labels: L) -> Vec<String>
where
    L: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels.into_iter().map(Into::into).collect()
}
