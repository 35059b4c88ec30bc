use crate::error::ChartResult;
use crate::render::{FrameTarget, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real drawing surface is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_polyline_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_history_polyline_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        match frame.target {
            FrameTarget::MainChart => {
                self.last_polyline_count = frame.polylines.len();
                self.last_line_count = frame.lines.len();
                self.last_text_count = frame.texts.len();
            }
            FrameTarget::HistoryStrip => {
                self.last_history_polyline_count = frame.polylines.len();
            }
        }
        Ok(())
    }
}
