use chrono::{Datelike, NaiveDate};

use crate::core::scale::LinearScale;
use crate::error::{TimelineError, TimelineResult};

/// Continuous time axis over one canonical "template" year.
///
/// Every event, regardless of its actual year, is positioned by month and day
/// only: its date is re-anchored onto the template year (the dataset's latest
/// year) so all events overlay onto a single horizontal timeline. The domain
/// spans January 1 through December 31 of that year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalScale {
    template_year: i32,
    scale: LinearScale,
}

impl SeasonalScale {
    pub fn new(template_year: i32, range_start: f64, range_end: f64) -> TimelineResult<Self> {
        let jan_first = NaiveDate::from_ymd_opt(template_year, 1, 1);
        let dec_last = NaiveDate::from_ymd_opt(template_year, 12, 31);
        let (jan_first, dec_last) = match (jan_first, dec_last) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(TimelineError::InvalidData(format!(
                    "template year {template_year} is out of calendar range"
                )));
            }
        };

        let scale = LinearScale::new(
            day_number(jan_first),
            day_number(dec_last),
            range_start,
            range_end,
        )?;

        Ok(Self {
            template_year,
            scale,
        })
    }

    #[must_use]
    pub fn template_year(self) -> i32 {
        self.template_year
    }

    /// Shifts `date` onto the template year, keeping month and day.
    ///
    /// Feb 29 rolls over to Mar 1 when the template year is not a leap year.
    #[must_use]
    pub fn reanchor(self, date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.template_year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(self.template_year, 3, 1))
            .unwrap_or(date)
    }

    /// Horizontal pixel offset for `date` after re-anchoring.
    pub fn position(self, date: NaiveDate) -> TimelineResult<f64> {
        self.scale.project(day_number(self.reanchor(date)))
    }

    /// Twelve tick anchors at the first of each month, `%b`-formatted.
    pub fn month_ticks(self) -> TimelineResult<Vec<(f64, String)>> {
        let mut ticks = Vec::with_capacity(12);
        for month in 1..=12 {
            let first = NaiveDate::from_ymd_opt(self.template_year, month, 1).ok_or_else(|| {
                TimelineError::InvalidData(format!(
                    "month {month} of {} is out of calendar range",
                    self.template_year
                ))
            })?;
            ticks.push((
                self.scale.project(day_number(first))?,
                first.format("%b").to_string(),
            ));
        }
        Ok(ticks)
    }
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}
