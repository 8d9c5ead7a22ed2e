use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and by hosts that only need chart state.
///
/// Frames are still validated so invalid geometry surfaces before a real
/// backend is attached. `detached()` models a target without a drawing
/// context.
#[derive(Debug)]
pub struct NullRenderer {
    surface: Option<Viewport>,
    pub frames_rendered: u64,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            surface: Some(viewport),
            frames_rendered: 0,
            last_line_count: 0,
            last_rect_count: 0,
            last_text_count: 0,
        }
    }

    #[must_use]
    pub fn detached() -> Self {
        Self {
            surface: None,
            ..Self::default()
        }
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(Viewport::new(800, 400))
    }
}

impl Renderer for NullRenderer {
    fn surface(&self) -> Option<Viewport> {
        self.surface
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
