pub mod chart_state;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use chart_state::{AppendSummary, ChartState};
pub use primitives::{decimal_to_f64, time_label};
pub use scale::LinearScale;
pub use series::{DEFAULT_BORDER_COLOR, Series};
pub use types::Viewport;
