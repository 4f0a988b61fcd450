use chrono::Datelike;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::types::{DisasterCategory, EventRecord};
use crate::error::{TimelineError, TimelineResult};

/// Immutable event collection plus the aggregates the engine derives once.
///
/// All aggregates are computed from the FULL record set at build time and are
/// never touched by filter changes. In particular the per-year maximum keeps
/// reflecting the true yearly extremum even when the record holding it is
/// filtered out of view.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDataset {
    records: Vec<EventRecord>,
    magnitude_range: (f64, f64),
    years_descending: Vec<i32>,
    max_magnitude_by_year: IndexMap<i32, f64>,
    category_counts: IndexMap<DisasterCategory, usize>,
}

impl EventDataset {
    /// Validates and aggregates a record sequence, all-or-nothing.
    ///
    /// Rejects negative or non-finite magnitudes, records whose `year`
    /// disagrees with `occurred_on`, and empty input (the scales need a
    /// non-empty domain).
    pub fn build(records: Vec<EventRecord>) -> TimelineResult<Self> {
        if records.is_empty() {
            return Err(TimelineError::InvalidData(
                "timeline dataset requires at least one record".to_owned(),
            ));
        }

        let mut max_magnitude_by_year: IndexMap<i32, f64> = IndexMap::new();
        let mut category_counts: IndexMap<DisasterCategory, usize> = IndexMap::new();

        for record in &records {
            if !record.magnitude.is_finite() || record.magnitude < 0.0 {
                return Err(TimelineError::malformed(
                    &record.name,
                    format!("magnitude must be finite and >= 0, got {}", record.magnitude),
                ));
            }
            if record.year != record.occurred_on.year() {
                return Err(TimelineError::malformed(
                    &record.name,
                    format!(
                        "year {} disagrees with date {}",
                        record.year, record.occurred_on
                    ),
                ));
            }

            let year_max = max_magnitude_by_year
                .entry(record.year)
                .or_insert(f64::NEG_INFINITY);
            if record.magnitude > *year_max {
                *year_max = record.magnitude;
            }

            *category_counts.entry(record.category).or_insert(0) += 1;
        }

        max_magnitude_by_year.sort_unstable_by(|year_a, _, year_b, _| year_b.cmp(year_a));
        let years_descending = max_magnitude_by_year.keys().copied().collect();

        // Input was verified non-empty above, so min/max always exist.
        let magnitudes = || records.iter().map(|record| OrderedFloat(record.magnitude));
        let magnitude_range = (
            magnitudes().min().unwrap_or_default().into_inner(),
            magnitudes().max().unwrap_or_default().into_inner(),
        );

        Ok(Self {
            records,
            magnitude_range,
            years_descending,
            max_magnitude_by_year,
            category_counts,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest year present; the template year every event is re-anchored onto.
    #[must_use]
    pub fn max_year(&self) -> i32 {
        self.years_descending[0]
    }

    /// Distinct years, most recent first. Domain of the vertical band scale.
    #[must_use]
    pub fn years_descending(&self) -> &[i32] {
        &self.years_descending
    }

    /// Global (min, max) magnitude across ALL records, so radii stay
    /// comparable across the whole dataset rather than the visible subset.
    #[must_use]
    pub fn magnitude_range(&self) -> (f64, f64) {
        self.magnitude_range
    }

    /// Maximum magnitude observed in `year` over the unfiltered dataset.
    #[must_use]
    pub fn max_magnitude_in(&self, year: i32) -> Option<f64> {
        self.max_magnitude_by_year.get(&year).copied()
    }

    #[must_use]
    pub fn max_magnitude_by_year(&self) -> &IndexMap<i32, f64> {
        &self.max_magnitude_by_year
    }

    /// Occurrence count per category, in first-appearance order.
    /// Legend membership is derived from this once, at engine construction.
    #[must_use]
    pub fn category_counts(&self) -> &IndexMap<DisasterCategory, usize> {
        &self.category_counts
    }

    /// Records whose category is in `selected`; an empty selection means no
    /// filter is active and every record is returned.
    #[must_use]
    pub fn filtered_by(&self, selected: &[DisasterCategory]) -> Vec<&EventRecord> {
        self.records
            .iter()
            .filter(|record| selected.is_empty() || selected.contains(&record.category))
            .collect()
    }
}
