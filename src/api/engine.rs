use tracing::{debug, trace};

use crate::core::{
    DisasterCategory, EventDataset, EventRecord, RadiusScale, SeasonalScale, YearBandScale,
};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{FilterState, TooltipRequest};
use crate::palette::{self, CategoryPalette};
use crate::render::{
    ArcPrimitive, AxisTick, Color, LegendEntry, LinePrimitive, Renderer, TextHAlign, TextPrimitive,
    TimelineFrame,
};

use super::TimelineConfig;

/// Stroke color of the per-year guide lines.
const GRID_LINE: Color = Color::rgb(0.85, 0.85, 0.85);

/// Main orchestration facade consumed by host applications.
///
/// The engine owns the dataset for its lifetime and computes all three scales
/// once, from full-dataset extrema, so axes and radii stay stable across
/// filter changes. Each interaction completes its filter mutation and
/// re-render before the next is accepted; there is no concurrency anywhere.
pub struct TimelineEngine<R: Renderer> {
    renderer: R,
    config: TimelineConfig,
    dataset: EventDataset,
    palette: CategoryPalette,
    year_scale: YearBandScale,
    season_scale: SeasonalScale,
    radius_scale: RadiusScale,
    filter: FilterState,
    legend_categories: Vec<DisasterCategory>,
    last_frame: Option<TimelineFrame>,
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn new(renderer: R, config: TimelineConfig, dataset: EventDataset) -> TimelineResult<Self> {
        config.validate()?;

        let year_scale = YearBandScale::new(
            dataset.years_descending().to_vec(),
            0.0,
            config.inner_height(),
        )?;
        let season_scale = SeasonalScale::new(dataset.max_year(), 0.0, config.inner_width())?;
        let (magnitude_min, magnitude_max) = dataset.magnitude_range();
        let radius_scale = RadiusScale::new(
            magnitude_min,
            magnitude_max,
            config.radius_min_px,
            config.radius_max_px,
        )?;

        // Category membership is fixed for the dataset's lifetime, so the
        // legend row set is derived exactly once.
        let legend_categories = dataset.category_counts().keys().copied().collect();

        debug!(
            records = dataset.len(),
            years = dataset.years_descending().len(),
            template_year = dataset.max_year(),
            "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            palette: CategoryPalette::default(),
            year_scale,
            season_scale,
            radius_scale,
            filter: FilterState::new(),
            legend_categories,
            last_frame: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &EventDataset {
        &self.dataset
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn legend_categories(&self) -> &[DisasterCategory] {
        &self.legend_categories
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&TimelineFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    /// Replaces the color palette. Takes effect on the next render pass.
    pub fn set_palette(&mut self, palette: CategoryPalette) {
        self.palette = palette;
    }

    /// Records passing the current filter, in dataset order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&EventRecord> {
        self.dataset.filtered_by(self.filter.selected())
    }

    /// Toggles membership of `category` in the filter, then re-renders.
    ///
    /// Returns whether the category is selected after the call. Scales are
    /// not recomputed.
    pub fn toggle_category(&mut self, category: DisasterCategory) -> TimelineResult<bool> {
        let selected = self.filter.toggle(category);
        debug!(%category, selected, "legend toggle");
        self.render()?;
        Ok(selected)
    }

    /// Projects the current visible set into a frame and hands it to the
    /// renderer. Idempotent for a fixed filter state.
    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.project_frame()?;
        self.renderer.render(&frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }

    /// Tooltip payload for the topmost visible half-disc containing `(x, y)`,
    /// in viewport pixel coordinates. Requires a prior render pass.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<TooltipRequest> {
        let frame = self.last_frame.as_ref()?;
        // Later arcs draw on top, so scan in reverse emission order.
        let arc = frame.arcs.iter().rev().find(|arc| arc.contains(x, y))?;
        let record = self.dataset.records().get(arc.key)?;
        Some(TooltipRequest {
            name: record.name.clone(),
            magnitude: record.magnitude,
        })
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn project_frame(&self) -> TimelineResult<TimelineFrame> {
        let mut frame = TimelineFrame::new(self.config.viewport);
        let left = self.config.margins.left;
        let top = self.config.margins.top;

        for (key, record) in self.dataset.records().iter().enumerate() {
            if !self.filter.matches(record.category) {
                continue;
            }

            let x = left + self.season_scale.position(record.occurred_on)?;
            let band_top = self.year_scale.position(record.year).ok_or_else(|| {
                TimelineError::InvalidData(format!("year {} outside band domain", record.year))
            })?;

            frame.arcs.push(ArcPrimitive {
                key,
                category: record.category,
                apex_x: x,
                apex_y: top + band_top + self.config.arc_apex_offset_px,
                radius: self.radius_scale.radius(record.magnitude)?,
                fill: self.palette.color_for(record.category),
            });

            // Exact-equality match against the filter-independent per-year
            // maximum; ties at the maximum all get labeled, and a filtered-out
            // maximum promotes no substitute.
            if self.dataset.max_magnitude_in(record.year) == Some(record.magnitude) {
                frame.annotations.push(TextPrimitive::new(
                    record.name.clone(),
                    x,
                    top + band_top + self.config.annotation_offset_px,
                    self.config.annotation_font_size_px,
                    palette::ANNOTATION_GREY,
                    TextHAlign::Center,
                ));
            }
        }

        trace!(
            visible = frame.arcs.len(),
            labeled = frame.annotations.len(),
            "projected visible set"
        );

        let tick_size = self.config.axis_tick_size_px;
        let tick_padding = self.config.axis_tick_padding_px;
        for (offset, label) in self.season_scale.month_ticks()? {
            frame
                .month_ticks
                .push(AxisTick::new(left + offset, label, tick_size, tick_padding));
        }

        let right_edge = left + self.config.inner_width();
        for (year, offset) in self.year_scale.ticks() {
            frame.year_ticks.push(AxisTick::new(
                top + offset,
                year.to_string(),
                tick_size,
                tick_padding,
            ));
            frame.grid_lines.push(LinePrimitive::new(
                left,
                top + offset,
                right_edge,
                top + offset,
                1.0,
                GRID_LINE,
            ));
        }

        for (row, &category) in self.legend_categories.iter().enumerate() {
            let row = row as f64;
            let selected = self.filter.is_selected(category);
            frame.legend.push(LegendEntry {
                category,
                label: category.display_name().to_owned(),
                swatch_x: self.config.legend_swatch_x_px,
                swatch_y: row * self.config.legend_row_step_px
                    + 2.0 * self.config.legend_swatch_radius_px,
                swatch_radius: self.config.legend_swatch_radius_px,
                swatch_fill: self.palette.color_for(category),
                label_x: self.config.legend_label_x_px,
                label_y: (row + 1.0) * self.config.legend_row_step_px,
                label_color: if selected {
                    palette::LABEL_EMPHASIS
                } else {
                    palette::LABEL_MUTED
                },
                font_size_px: self.config.legend_font_size_px,
                selected,
            });
        }

        Ok(frame)
    }
}
