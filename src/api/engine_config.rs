use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

/// Space reserved around the inner chart area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 120.0,
            right: 20.0,
            bottom: 20.0,
            left: 45.0,
        }
    }
}

/// Engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Defaults reproduce the reference
/// 800x900 disaster-cost chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: ChartMargins,
    #[serde(default = "default_radius_min_px")]
    pub radius_min_px: f64,
    #[serde(default = "default_radius_max_px")]
    pub radius_max_px: f64,
    /// Vertical offset from a year's band top to the half-disc apex.
    #[serde(default = "default_arc_apex_offset_px")]
    pub arc_apex_offset_px: f64,
    /// Vertical offset from a year's band top to its annotation baseline.
    #[serde(default = "default_annotation_offset_px")]
    pub annotation_offset_px: f64,
    #[serde(default = "default_annotation_font_size_px")]
    pub annotation_font_size_px: f64,
    #[serde(default = "default_axis_tick_size_px")]
    pub axis_tick_size_px: f64,
    #[serde(default = "default_axis_tick_padding_px")]
    pub axis_tick_padding_px: f64,
    #[serde(default = "default_legend_swatch_x_px")]
    pub legend_swatch_x_px: f64,
    #[serde(default = "default_legend_swatch_radius_px")]
    pub legend_swatch_radius_px: f64,
    #[serde(default = "default_legend_label_x_px")]
    pub legend_label_x_px: f64,
    #[serde(default = "default_legend_row_step_px")]
    pub legend_row_step_px: f64,
    #[serde(default = "default_legend_font_size_px")]
    pub legend_font_size_px: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::new(Viewport::new(800, 900))
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: ChartMargins::default(),
            radius_min_px: default_radius_min_px(),
            radius_max_px: default_radius_max_px(),
            arc_apex_offset_px: default_arc_apex_offset_px(),
            annotation_offset_px: default_annotation_offset_px(),
            annotation_font_size_px: default_annotation_font_size_px(),
            axis_tick_size_px: default_axis_tick_size_px(),
            axis_tick_padding_px: default_axis_tick_padding_px(),
            legend_swatch_x_px: default_legend_swatch_x_px(),
            legend_swatch_radius_px: default_legend_swatch_radius_px(),
            legend_label_x_px: default_legend_label_x_px(),
            legend_row_step_px: default_legend_row_step_px(),
            legend_font_size_px: default_legend_font_size_px(),
        }
    }

    #[must_use]
    pub fn with_radius_range(mut self, radius_min_px: f64, radius_max_px: f64) -> Self {
        self.radius_min_px = radius_min_px;
        self.radius_max_px = radius_max_px;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Inner chart width after margins.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    /// Inner chart height after margins.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (value, name) in [
            (self.margins.top, "margins.top"),
            (self.margins.right, "margins.right"),
            (self.margins.bottom, "margins.bottom"),
            (self.margins.left, "margins.left"),
            (self.arc_apex_offset_px, "arc_apex_offset_px"),
            (self.annotation_offset_px, "annotation_offset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "config `{name}` must be finite and >= 0"
                )));
            }
        }

        for (value, name) in [
            (self.annotation_font_size_px, "annotation_font_size_px"),
            (self.axis_tick_size_px, "axis_tick_size_px"),
            (self.axis_tick_padding_px, "axis_tick_padding_px"),
            (self.legend_swatch_x_px, "legend_swatch_x_px"),
            (self.legend_swatch_radius_px, "legend_swatch_radius_px"),
            (self.legend_label_x_px, "legend_label_x_px"),
            (self.legend_row_step_px, "legend_row_step_px"),
            (self.legend_font_size_px, "legend_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "config `{name}` must be finite and > 0"
                )));
            }
        }

        if !self.radius_min_px.is_finite()
            || !self.radius_max_px.is_finite()
            || self.radius_min_px <= 0.0
            || self.radius_min_px >= self.radius_max_px
        {
            return Err(TimelineError::InvalidData(
                "config radius range must be finite, > 0 and increasing".to_owned(),
            ));
        }

        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(TimelineError::InvalidData(
                "margins leave no inner chart area".to_owned(),
            ));
        }

        Ok(())
    }
}

fn default_radius_min_px() -> f64 {
    4.0
}

fn default_radius_max_px() -> f64 {
    140.0
}

fn default_arc_apex_offset_px() -> f64 {
    10.0
}

fn default_annotation_offset_px() -> f64 {
    20.0
}

fn default_annotation_font_size_px() -> f64 {
    10.0
}

fn default_axis_tick_size_px() -> f64 {
    10.0
}

fn default_axis_tick_padding_px() -> f64 {
    8.0
}

fn default_legend_swatch_x_px() -> f64 {
    10.0
}

fn default_legend_swatch_radius_px() -> f64 {
    5.0
}

fn default_legend_label_x_px() -> f64 {
    20.0
}

fn default_legend_row_step_px() -> f64 {
    14.0
}

fn default_legend_font_size_px() -> f64 {
    12.0
}
