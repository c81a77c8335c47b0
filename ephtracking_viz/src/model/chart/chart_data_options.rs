use crate::common::*;

use crate::dto::request_spec::*;

use crate::error::chart_error::*;

use crate::model::temporal::temporal_spec::*;

pub const DEFAULT_FIRST_YEAR: i32 = 2000;

#[doc = "Measure selection of one bubble axis"]
#[derive(Debug, Clone, Default, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct MeasureOptions {
    pub measure_id: Option<String>,
    #[serde(default)]
    pub is_smoothed: bool,
}

#[doc = r#"
    `data` table of a chart request.

    Only `measure_id` (or `x`/`y` for bubble charts) is required. A missing
    `temporal` falls back to 2000 through the current year.
"#]
#[derive(Debug, Clone, Default, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ChartDataOptions {
    pub measure_id: Option<String>,
    pub temporal: Option<TemporalInput>,
    pub stratification_level_id: Option<String>,
    pub geo_type_filter: Option<String>,
    pub geo_id_filter: Option<String>,
    #[serde(default)]
    pub is_smoothed: bool,
    pub query_params: Option<String>,
    #[serde(default)]
    pub stratified: bool,
    #[serde(default)]
    pub stratification_names: HashMap<String, String>,
    pub x: Option<MeasureOptions>,
    pub y: Option<MeasureOptions>,
    #[serde(default)]
    pub population: HashMap<String, f64>,
    #[serde(default)]
    pub regions: HashMap<String, String>,
}

impl ChartDataOptions {
    #[doc = "Parsed temporal option, with the 2000-through-current-year default when absent"]
    pub fn temporal_spec(&self) -> ChartResult<TemporalSpec> {
        match &self.temporal {
            Some(input) => parse_temporal(Some(input)),
            None => Ok(TemporalSpec::default_span(DEFAULT_FIRST_YEAR)),
        }
    }

    pub fn stratification_level(&self) -> &str {
        self.stratification_level_id
            .as_deref()
            .unwrap_or(STATE_LEVEL)
    }

    #[doc = r#"
        Request of the chart's main measure.

        # Errors
        * `MissingOption` - no `measure_id`
        * `InvalidTemporal` - temporal option does not validate
    "#]
    pub fn request_spec(&self) -> ChartResult<RequestSpec> {
        let measure_id: &str = self
            .measure_id
            .as_deref()
            .ok_or(ChartError::MissingOption("measure_id"))?;

        self.request_spec_for(measure_id, self.is_smoothed)
    }

    #[doc = "Request of one bubble axis, sharing this chart's temporal and geography options"]
    pub fn axis_request_spec(
        &self,
        axis: &Option<MeasureOptions>,
        name: &'static str,
    ) -> ChartResult<RequestSpec> {
        let measure_id: &str = axis
            .as_ref()
            .and_then(|a| a.measure_id.as_deref())
            .ok_or(ChartError::MissingOption(name))?;

        let is_smoothed: bool = axis.as_ref().is_some_and(|a| a.is_smoothed);

        self.request_spec_for(measure_id, is_smoothed)
    }

    fn request_spec_for(&self, measure_id: &str, is_smoothed: bool) -> ChartResult<RequestSpec> {
        let temporal: TemporalSpec = self.temporal_spec()?;

        Ok(RequestSpec::for_measure(measure_id, temporal)
            .with_stratification_level(self.stratification_level())
            .with_geo_filters(
                self.geo_type_filter.as_deref().unwrap_or(ALL_FILTER),
                self.geo_id_filter.as_deref().unwrap_or(ALL_FILTER),
            )
            .with_smoothing(is_smoothed)
            .with_query_params(self.query_params.clone()))
    }
}
