use crate::error::{TimelineError, TimelineResult};

/// Discrete band positioning for the vertical year axis.
///
/// The domain is the distinct years present in the dataset, most recent
/// first, so the latest year occupies the top band row. Each year gets an
/// equal-height band across `[range_start, range_end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBandScale {
    years_descending: Vec<i32>,
    range_start: f64,
    range_end: f64,
}

impl YearBandScale {
    pub fn new(years_descending: Vec<i32>, range_start: f64, range_end: f64) -> TimelineResult<Self> {
        if years_descending.is_empty() {
            return Err(TimelineError::InvalidData(
                "band scale requires at least one year".to_owned(),
            ));
        }
        if !years_descending.windows(2).all(|pair| pair[0] > pair[1]) {
            return Err(TimelineError::InvalidData(
                "band scale years must be strictly descending".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start >= range_end {
            return Err(TimelineError::InvalidData(
                "band scale range must be finite and increasing".to_owned(),
            ));
        }

        Ok(Self {
            years_descending,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years_descending
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        (self.range_end - self.range_start) / self.years_descending.len() as f64
    }

    /// Top edge of the band row for `year`, or `None` for a year outside the
    /// domain.
    #[must_use]
    pub fn position(&self, year: i32) -> Option<f64> {
        self.years_descending
            .iter()
            .position(|&candidate| candidate == year)
            .map(|index| self.range_start + index as f64 * self.bandwidth())
    }

    /// Tick anchors for the year axis: (year, band center offset).
    #[must_use]
    pub fn ticks(&self) -> Vec<(i32, f64)> {
        let half_band = self.bandwidth() * 0.5;
        self.years_descending
            .iter()
            .enumerate()
            .map(|(index, &year)| {
                (
                    year,
                    self.range_start + index as f64 * self.bandwidth() + half_band,
                )
            })
            .collect()
    }
}
