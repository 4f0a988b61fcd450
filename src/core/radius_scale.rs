use crate::error::{TimelineError, TimelineResult};

/// Square-root magnitude-to-radius scale.
///
/// A half-disc's area grows with radius squared, so mapping the square root
/// of magnitude keeps the perceived AREA, not the radius, linear in cost.
/// The domain is the global magnitude range of the full dataset, which keeps
/// radii comparable across filter changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl RadiusScale {
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        range_min: f64,
        range_max: f64,
    ) -> TimelineResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min < 0.0 {
            return Err(TimelineError::InvalidData(
                "radius scale domain must be finite and >= 0".to_owned(),
            ));
        }
        if domain_min > domain_max {
            return Err(TimelineError::InvalidData(
                "radius scale domain must be ordered".to_owned(),
            ));
        }
        if !range_min.is_finite()
            || !range_max.is_finite()
            || range_min <= 0.0
            || range_min >= range_max
        {
            return Err(TimelineError::InvalidData(
                "radius scale pixel range must be finite, > 0 and increasing".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    /// Outer radius in pixels for `magnitude`.
    ///
    /// A degenerate single-value domain maps to the range midpoint.
    pub fn radius(self, magnitude: f64) -> TimelineResult<f64> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(TimelineError::InvalidData(
                "magnitude must be finite and >= 0".to_owned(),
            ));
        }

        let sqrt_min = self.domain_min.sqrt();
        let sqrt_max = self.domain_max.sqrt();
        let normalized = if sqrt_max == sqrt_min {
            0.5
        } else {
            (magnitude.sqrt() - sqrt_min) / (sqrt_max - sqrt_min)
        };

        Ok(self.range_min + normalized * (self.range_max - self.range_min))
    }
}
