use crate::error::TimelineResult;
use crate::render::{Renderer, TimelineFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_arc_count: usize,
    pub last_annotation_count: usize,
    pub last_legend_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &TimelineFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.last_arc_count = frame.arcs.len();
        self.last_annotation_count = frame.annotations.len();
        self.last_legend_count = frame.legend.len();
        Ok(())
    }
}
