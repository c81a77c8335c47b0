pub type ChartResult<T> = Result<T, ChartError>;

#[doc = r#"
    Failure taxonomy of the chart data pipeline.

    `InvalidTemporal` and `MissingOption` are raised while validating the request,
    before anything is sent over the network. `Fetch` aborts the whole chart render.
    `MalformedRecord` is only raised when the caller requires a plottable value for
    every record; otherwise a bad value becomes a gap in its series.

    An empty result set is not an error, see `FetchOutcome::Empty`.
"#]
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("invalid temporal option: {0}")]
    InvalidTemporal(String),

    #[error("missing data option: {0}")]
    MissingOption(&'static str),

    #[error("fetch failed: {0:#}")]
    Fetch(#[source] anyhow::Error),

    #[error("malformed record (geo_id={geo_id}, year={year}): {reason}")]
    MalformedRecord {
        geo_id: String,
        year: String,
        reason: String,
    },
}

impl ChartError {
    pub fn invalid_temporal(msg: impl Into<String>) -> Self {
        Self::InvalidTemporal(msg.into())
    }

    pub fn fetch(err: impl Into<anyhow::Error>) -> Self {
        Self::Fetch(err.into())
    }

    pub fn malformed(geo_id: &str, year: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            geo_id: geo_id.to_string(),
            year: year.to_string(),
            reason: reason.into(),
        }
    }

    #[doc = "True for errors detected before any request is issued"]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidTemporal(_) | Self::MissingOption(_))
    }
}
