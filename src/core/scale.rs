use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale over `[min, max]`. A flat extent is widened on each
    /// side by one unit or one billionth of its magnitude, whichever is
    /// larger, so constant series map to the middle of the range at any
    /// scale.
    pub fn from_extent(min: f64, max: f64) -> ChartResult<Self> {
        if min == max {
            let pad = (min.abs() * 1e-9).max(1.0);
            return Self::new((min - pad).max(f64::MIN), (max + pad).min(f64::MAX));
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` onto `[range_start, range_end]`. The range may be
    /// descending, which is how value axes grow upwards on screen.
    pub fn map(self, value: f64, range_start: f64, range_end: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel range must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = if span.is_finite() {
            (value - self.domain_start) / span
        } else {
            // Domain wider than f64::MAX: work on halves to stay finite.
            (value / 2.0 - self.domain_start / 2.0)
                / (self.domain_end / 2.0 - self.domain_start / 2.0)
        };
        Ok(range_start + normalized * (range_end - range_start))
    }
}
