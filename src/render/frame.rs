use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive,
};

/// Which chart surface a frame targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTarget {
    MainChart,
    HistoryStrip,
}

/// Backend-agnostic scene for one draw pass.
///
/// Backends should paint collections in field order: rects behind, then grid
/// lines, polylines, overlays, circles and texts on top. Tooltip panels and
/// range selector chrome go into the overlay collections so they paint above
/// the series.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub target: FrameTarget,
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub overlay_rects: Vec<RectPrimitive>,
    pub overlay_lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(target: FrameTarget, viewport: Viewport) -> Self {
        Self {
            target,
            viewport,
            rects: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            overlay_rects: Vec::new(),
            overlay_lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in self.rects.iter().chain(&self.overlay_rects) {
            rect.validate()?;
        }
        for line in self.lines.iter().chain(&self.overlay_lines) {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.polylines.is_empty()
            && self.overlay_rects.is_empty()
            && self.overlay_lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}
