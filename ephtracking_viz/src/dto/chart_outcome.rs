use crate::common::*;

use crate::enums::chart_kind::*;

use crate::model::series::series_collection::*;

use crate::service::animator::*;

#[doc = r#"
    Data of an initially drawn chart. `series` is the chart's main series set,
    `paired_series` the second measure of a bubble chart. `animator` is present
    when the temporal spec covers more than one year.
"#]
#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct RenderedChart {
    kind: ChartKind,
    container: String,
    series: SeriesCollection,
    paired_series: Option<SeriesCollection>,
    animator: Option<Animator>,
}

impl RenderedChart {
    pub fn animator_mut(&mut self) -> Option<&mut Animator> {
        self.animator.as_mut()
    }
}

#[derive(Debug)]
pub enum ChartOutcome {
    Rendered(RenderedChart),
    /* valid response without records, a "no data" placeholder is shown */
    NoData,
    /* the chart was torn down while its data was in flight */
    Discarded,
}
