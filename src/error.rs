use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("render target cannot host a chart: {reason}")]
    RenderTarget { reason: String },

    #[error("no series with label `{label}`")]
    SeriesNotFound { label: String },

    #[error(
        "series `{series}` has {data_len} data points but the chart has {labels_len} labels"
    )]
    LengthMismatch {
        series: String,
        data_len: usize,
        labels_len: usize,
    },

    #[error("series label `{label}` is supplied more than once")]
    DuplicateSeries { label: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
