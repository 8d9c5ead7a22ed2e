use tracing::{debug, trace, warn};

use crate::core::Series;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartAdapter, PluginEvent, build_render_frame, collect_labels};

impl<R: Renderer> ChartAdapter<R> {
    /// Replaces labels and series wholesale.
    ///
    /// The replacement is validated like construction input and stamped with
    /// the fixed border color. No redraw is issued; call
    /// [`ChartAdapter::redraw`] when the new data should become visible.
    pub fn update<L, S>(&mut self, labels: L, series: Vec<Series>) -> ChartResult<()>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.replace(collect_labels(labels), series)?;
        debug!(
            labels_len = self.state.labels().len(),
            series_len = self.state.series_len(),
            "replace chart data"
        );
        self.emit_plugin_event(PluginEvent::DataReplaced {
            labels_len: self.state.labels().len(),
            series_len: self.state.series_len(),
        });
        Ok(())
    }

    /// Appends `labels` and, for each supplied series, its points to the
    /// existing series with the same label, then redraws once.
    ///
    /// The call is all-or-nothing: an unknown series label fails with
    /// [`crate::ChartError::SeriesNotFound`] and input that would leave any
    /// series misaligned with the labels fails with
    /// [`crate::ChartError::LengthMismatch`], both before anything is written.
    /// The frame for the grown state is built before the call commits; if
    /// that fails the append is rolled back.
    ///
    /// Once committed, the only remaining failure is the backend rejecting
    /// the frame. The appended data is then kept, the render count is not
    /// advanced and the backend error is returned; a later
    /// [`ChartAdapter::redraw`] shows the data without appending it again.
    pub fn update_incremental<L, S>(&mut self, labels: L, series: Vec<Series>) -> ChartResult<()>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let previous_len = self.state.labels().len();
        let summary = self.state.append(collect_labels(labels), series)?;
        let frame = build_render_frame(&self.state, &self.options, self.viewport)
            .inspect_err(|_| self.state.truncate(previous_len))?;
        trace!(
            labels_appended = summary.labels_appended,
            points_appended = summary.points_appended,
            labels_len = summary.labels_len,
            "append chart data"
        );
        self.emit_plugin_event(PluginEvent::DataAppended {
            labels_appended: summary.labels_appended,
            points_appended: summary.points_appended,
        });

        if let Err(err) = self.present(&frame) {
            warn!(
                error = %err,
                "renderer rejected frame after append; appended data is kept"
            );
            return Err(err);
        }
        Ok(())
    }
}
