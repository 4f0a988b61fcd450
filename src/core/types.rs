use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// The closed set of disaster categories present in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisasterCategory {
    WinterStormFreeze,
    DroughtWildfire,
    Flooding,
    TropicalCyclone,
    SevereStorm,
}

impl DisasterCategory {
    pub const ALL: [Self; 5] = [
        Self::WinterStormFreeze,
        Self::DroughtWildfire,
        Self::Flooding,
        Self::TropicalCyclone,
        Self::SevereStorm,
    ];

    /// Stable identifier used in the source table and serialized forms.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::WinterStormFreeze => "winter-storm-freeze",
            Self::DroughtWildfire => "drought-wildfire",
            Self::Flooding => "flooding",
            Self::TropicalCyclone => "tropical-cyclone",
            Self::SevereStorm => "severe-storm",
        }
    }

    /// Human-readable legend label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WinterStormFreeze => "Winter storms, freezing",
            Self::DroughtWildfire => "Drought and wildfire",
            Self::Flooding => "Flooding",
            Self::TropicalCyclone => "Tropical cyclones",
            Self::SevereStorm => "Severe storms",
        }
    }
}

impl fmt::Display for DisasterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DisasterCategory {
    type Err = TimelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == value)
            .ok_or_else(|| TimelineError::UnknownCategory(value.to_owned()))
    }
}

/// One disaster event as consumed by the layout engine.
///
/// `year` is authoritative for the vertical band; `occurred_on`'s month and
/// day are authoritative for the horizontal position. The two must agree on
/// the year, which `EventDataset::build` enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub category: DisasterCategory,
    /// Monetary cost in billions.
    pub magnitude: f64,
    pub occurred_on: NaiveDate,
    pub year: i32,
    pub name: String,
}

impl EventRecord {
    #[must_use]
    pub fn new(
        category: DisasterCategory,
        magnitude: f64,
        occurred_on: NaiveDate,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category,
            magnitude,
            occurred_on,
            year: occurred_on.year(),
            name: name.into(),
        }
    }
}
