use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart kinds the adapter can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default)]
    pub display: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(default)]
    pub legend: LegendOptions,
}

/// Option tree handed to the rendering side, shaped as
/// `{ "type": "line", "plugins": { "legend": { "display": false } } }`.
///
/// Adapters always run with [`ChartOptions::fixed`]; the type is public so
/// frames can be built and inspected outside an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub plugins: PluginOptions,
}

impl ChartOptions {
    /// Line chart with the legend hidden.
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            kind: ChartKind::Line,
            plugins: PluginOptions {
                legend: LegendOptions { display: false },
            },
        }
    }

    #[must_use]
    pub fn legend_displayed(&self) -> bool {
        self.plugins.legend.display
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart options: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart options: {e}")))
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::fixed()
    }
}
