use crate::common::*;

use crate::error::chart_error::*;

use crate::dto::{fetch_outcome::*, request_spec::*};

#[async_trait]
pub trait DataFetchService: Send + Sync {
    #[doc = "
        Fetch the records of one request, a single attempt without retries
        # Returns
        * `FetchOutcome::Empty` when the result array is absent or empty
        * `ChartError::Fetch` on transport or decoding failure
    "]
    async fn fetch(&self, spec: &RequestSpec) -> ChartResult<FetchOutcome>;

    #[doc = "
        Fetch several requests concurrently and wait for all of them.
        Any failure fails the whole call, no partial results are returned.
        Outcomes are in the order of `specs`.
    "]
    async fn fetch_all(&self, specs: &[RequestSpec]) -> ChartResult<Vec<FetchOutcome>>;
}
