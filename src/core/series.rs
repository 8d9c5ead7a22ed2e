use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;
use crate::render::Color;

/// Border color every series drawn by a chart is stroked with (`#4c51bf`).
pub const DEFAULT_BORDER_COLOR: Color = Color::from_rgb8(0x4c, 0x51, 0xbf);

fn default_border_color() -> Color {
    DEFAULT_BORDER_COLOR
}

/// One named line: values aligned by index with the chart labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
            border_color: DEFAULT_BORDER_COLOR,
        }
    }

    pub fn from_decimals(label: impl Into<String>, values: &[Decimal]) -> ChartResult<Self> {
        let label = label.into();
        let data = values
            .iter()
            .map(|value| decimal_to_f64(*value, &label))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::new(label, data))
    }

    /// Overrides the border color. Charts re-apply [`DEFAULT_BORDER_COLOR`]
    /// to every series they accept, so this only matters for detached values.
    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn apply_fixed_color(&mut self) {
        self.border_color = DEFAULT_BORDER_COLOR;
    }
}
