use crate::core::{ChartState, LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, PlotArea, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartOptions;

const PLOT_PADDING_PX: f64 = 8.0;
const CATEGORY_AXIS_BAND_PX: f64 = 24.0;
const LEGEND_BAND_PX: f64 = 28.0;
const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_ITEM_GAP_PX: f64 = 16.0;
const SERIES_STROKE_WIDTH_PX: f64 = 3.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;
// Rough advance per glyph; good enough to keep legend items apart.
const LABEL_GLYPH_ADVANCE: f64 = 0.6;
const LABEL_COLOR: Color = Color::from_rgb8(0x66, 0x66, 0x66);

/// Builds the draw pass for `state` on a surface of `viewport` size.
///
/// Labels are spread evenly across the plot width, values are scaled over
/// the finite data extent onto the plot height, and each series becomes a
/// polyline in its border color. Non-finite points leave a gap. Legend
/// swatches and captions are only emitted when the legend is displayed.
pub fn build_render_frame(
    state: &ChartState,
    options: &ChartOptions,
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let plot = plot_area(viewport, options.legend_displayed());
    let mut frame = RenderFrame::new(viewport, plot);
    let category_x = category_positions(state.labels().len(), plot)?;

    if let Some((min, max)) = state.value_extent() {
        let value_scale = LinearScale::from_extent(min, max)?;
        for series in state.series() {
            let mut previous: Option<(f64, f64)> = None;
            for (value, x) in series.data.iter().zip(&category_x) {
                let current = if value.is_finite() {
                    Some((*x, value_scale.map(*value, plot.bottom, plot.top)?))
                } else {
                    None
                };
                if let (Some((x1, y1)), Some((x2, y2))) = (previous, current) {
                    frame.lines.push(LinePrimitive::new(
                        x1,
                        y1,
                        x2,
                        y2,
                        SERIES_STROKE_WIDTH_PX,
                        series.border_color,
                    ));
                }
                previous = current;
            }
        }
    }

    let label_y = plot.bottom + LABEL_FONT_SIZE_PX + 4.0;
    for (label, x) in state.labels().iter().zip(&category_x) {
        if label.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            label.as_str(),
            *x,
            label_y,
            LABEL_FONT_SIZE_PX,
            LABEL_COLOR,
            TextHAlign::Center,
        ));
    }

    if options.legend_displayed() {
        push_legend(&mut frame, state);
    }

    Ok(frame)
}

fn plot_area(viewport: Viewport, legend_displayed: bool) -> PlotArea {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let horizontal = PLOT_PADDING_PX.min(width / 2.0);
    let top_band = if legend_displayed {
        LEGEND_BAND_PX
    } else {
        PLOT_PADDING_PX
    };
    let top = top_band.min(height);

    PlotArea {
        left: horizontal,
        top,
        right: width - horizontal,
        bottom: (height - CATEGORY_AXIS_BAND_PX).max(top),
    }
}

fn category_positions(count: usize, plot: PlotArea) -> ChartResult<Vec<f64>> {
    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![plot.left + plot.width() / 2.0]),
        _ => {
            let scale = LinearScale::new(0.0, (count - 1) as f64)?;
            (0..count)
                .map(|index| scale.map(index as f64, plot.left, plot.right))
                .collect()
        }
    }
}

fn push_legend(frame: &mut RenderFrame, state: &ChartState) {
    let swatch_y = (LEGEND_BAND_PX - LEGEND_SWATCH_PX) / 2.0;
    let caption_y = swatch_y + LEGEND_SWATCH_PX;
    let mut cursor = PLOT_PADDING_PX;

    for series in state.series() {
        frame.rects.push(RectPrimitive::new(
            cursor,
            swatch_y,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
            series.border_color,
        ));
        cursor += LEGEND_SWATCH_PX + 6.0;

        if !series.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                series.label.as_str(),
                cursor,
                caption_y,
                LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Left,
            ));
            cursor +=
                series.label.chars().count() as f64 * LABEL_FONT_SIZE_PX * LABEL_GLYPH_ADVANCE;
        }
        cursor += LEGEND_ITEM_GAP_PX;
    }
}
