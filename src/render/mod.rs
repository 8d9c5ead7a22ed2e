mod frame;
mod null_renderer;
mod primitives;

pub use frame::{PlotArea, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// The backend is the render target a chart is hosted on. It reports its
/// drawing surface once at adapter construction and then receives fully
/// materialized frames, so drawing code stays isolated from chart data and
/// update semantics.
pub trait Renderer {
    /// Drawing surface size, or `None` when no drawing context is available.
    fn surface(&self) -> Option<Viewport>;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
