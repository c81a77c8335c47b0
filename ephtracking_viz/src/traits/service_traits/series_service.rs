use crate::error::chart_error::*;

use crate::model::record::raw_record::*;
use crate::model::series::{series_collection::*, series_options::*};

pub trait SeriesService: Send + Sync {
    #[doc = "
        Reshape fetched records into per-series time sequences
        # Arguments
        * `records` - Records in fetch order
        * `options` - Grouping, series cap, value policy, stratification lookup and palette
    "]
    fn build_series(
        &self,
        records: &[RawRecord],
        options: &SeriesOptions,
    ) -> ChartResult<SeriesCollection>;
}
