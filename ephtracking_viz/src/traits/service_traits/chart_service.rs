use crate::common::*;

use crate::error::chart_error::*;

use crate::enums::chart_kind::*;

use crate::dto::chart_outcome::*;

use crate::model::chart::{chart_data_options::*, disposal_token::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    fn kind(&self) -> ChartKind;

    #[doc = "
        Fetch, reshape and initially draw one chart
        # Arguments
        * `container` - Output name of the chart
        * `data` - Measure, geography and temporal options
        * `title` - Optional chart title
        * `token` - Liveness of the chart, checked once the data has arrived
        # Returns
        * `ChartOutcome` - the drawn chart (with its animator), no data, or discarded
    "]
    async fn render(
        &self,
        container: &str,
        data: &ChartDataOptions,
        title: Option<&str>,
        token: &DisposalToken,
    ) -> ChartResult<ChartOutcome>;
}
