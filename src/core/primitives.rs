use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Format used by [`time_label`].
pub const TIME_LABEL_FORMAT: &str = "%H:%M:%S";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Category label for a metric sample taken at `time` (UTC wall clock).
#[must_use]
pub fn time_label(time: DateTime<Utc>) -> String {
    time.format(TIME_LABEL_FORMAT).to_string()
}
