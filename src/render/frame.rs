use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{ArcPrimitive, AxisTick, LegendEntry, LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one timeline draw pass.
///
/// Each pass carries a complete, order-independent description of the current
/// visible set; diffing against previously emitted frames is the renderer's
/// responsibility (arc `key`s stay stable for that purpose).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub viewport: Viewport,
    /// One half-disc per visible event, in draw order (later = on top).
    pub arcs: Vec<ArcPrimitive>,
    /// "Costliest of the year" annotations.
    pub annotations: Vec<TextPrimitive>,
    /// Full-width horizontal guides, one per year row.
    pub grid_lines: Vec<LinePrimitive>,
    /// Month ticks along the template-year axis. Value-stable across filters.
    pub month_ticks: Vec<AxisTick>,
    /// Year ticks along the band axis. Value-stable across filters.
    pub year_ticks: Vec<AxisTick>,
    pub legend: Vec<LegendEntry>,
}

impl TimelineFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arcs: Vec::new(),
            annotations: Vec::new(),
            grid_lines: Vec::new(),
            month_ticks: Vec::new(),
            year_ticks: Vec::new(),
            legend: Vec::new(),
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for arc in &self.arcs {
            arc.validate()?;
        }
        for annotation in &self.annotations {
            annotation.validate()?;
        }
        for line in &self.grid_lines {
            line.validate()?;
        }
        for tick in self.month_ticks.iter().chain(&self.year_ticks) {
            tick.validate()?;
        }
        for entry in &self.legend {
            entry.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
            && self.annotations.is_empty()
            && self.grid_lines.is_empty()
            && self.month_ticks.is_empty()
            && self.year_ticks.is_empty()
            && self.legend.is_empty()
    }
}
