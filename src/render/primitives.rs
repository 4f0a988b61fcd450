use serde::{Deserialize, Serialize};

use crate::core::DisasterCategory;
use crate::error::{TimelineError, TimelineResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> TimelineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one event mark: a half-disc with a fixed 180° sweep,
/// flat side down, apex opening upward from `(apex_x, apex_y)`.
///
/// `key` is the record's index in the dataset and stays stable across render
/// passes, so a diffing renderer can match marks between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub key: usize,
    pub category: DisasterCategory,
    pub apex_x: f64,
    pub apex_y: f64,
    pub radius: f64,
    pub fill: Color,
}

impl ArcPrimitive {
    pub fn validate(self) -> TimelineResult<()> {
        if !self.apex_x.is_finite() || !self.apex_y.is_finite() {
            return Err(TimelineError::InvalidData(
                "arc center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TimelineError::InvalidData(
                "arc radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }

    /// Point containment for the upper half-disc, used for hover hit tests.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let dx = x - self.apex_x;
        let dy = y - self.apex_y;
        y <= self.apex_y && dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(TimelineError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.text.is_empty() {
            return Err(TimelineError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One axis tick: a pixel offset along the axis, its label, and the tick
/// mark/label metrics a backend needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub offset_px: f64,
    pub label: String,
    /// Length of the tick mark perpendicular to the axis.
    pub tick_size_px: f64,
    /// Gap between the tick mark and its label.
    pub label_padding_px: f64,
}

impl AxisTick {
    #[must_use]
    pub fn new(
        offset_px: f64,
        label: impl Into<String>,
        tick_size_px: f64,
        label_padding_px: f64,
    ) -> Self {
        Self {
            offset_px,
            label: label.into(),
            tick_size_px,
            label_padding_px,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.offset_px.is_finite() {
            return Err(TimelineError::InvalidData(
                "axis tick offset must be finite".to_owned(),
            ));
        }
        if self.label.is_empty() {
            return Err(TimelineError::InvalidData(
                "axis tick label must not be empty".to_owned(),
            ));
        }
        if !self.tick_size_px.is_finite() || self.tick_size_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "axis tick size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_padding_px.is_finite() || self.label_padding_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "axis tick label padding must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One clickable legend row: color swatch plus category label.
///
/// `selected` drives label emphasis so the active filter is visible in the
/// legend itself, without a separate indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub category: DisasterCategory,
    pub label: String,
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub swatch_radius: f64,
    pub swatch_fill: Color,
    pub label_x: f64,
    pub label_y: f64,
    pub label_color: Color,
    pub font_size_px: f64,
    pub selected: bool,
}

impl LegendEntry {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.label.is_empty() {
            return Err(TimelineError::InvalidData(
                "legend label must not be empty".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "legend font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.swatch_x.is_finite()
            || !self.swatch_y.is_finite()
            || !self.label_x.is_finite()
            || !self.label_y.is_finite()
        {
            return Err(TimelineError::InvalidData(
                "legend coordinates must be finite".to_owned(),
            ));
        }
        if !self.swatch_radius.is_finite() || self.swatch_radius <= 0.0 {
            return Err(TimelineError::InvalidData(
                "legend swatch radius must be finite and > 0".to_owned(),
            ));
        }
        self.swatch_fill.validate()?;
        self.label_color.validate()
    }
}
