use crate::common::*;

use crate::model::temporal::temporal_spec::*;

pub const STATE_LEVEL: &str = "1";
pub const ALL_FILTER: &str = "ALL";

#[doc = r#"
    One tracking API request: measure, geography filters, temporal coverage,
    smoothing flag and free-form query parameters.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct RequestSpec {
    measure_id: String,
    stratification_level_id: String,
    geo_type_filter: String,
    geo_id_filter: String,
    temporal: TemporalSpec,
    is_smoothed: bool,
    query_params: Option<String>,
}

impl RequestSpec {
    #[doc = "State level request over all geographies, not smoothed"]
    pub fn for_measure(measure_id: &str, temporal: TemporalSpec) -> Self {
        RequestSpec::new(
            measure_id.to_string(),
            STATE_LEVEL.to_string(),
            ALL_FILTER.to_string(),
            ALL_FILTER.to_string(),
            temporal,
            false,
            None,
        )
    }

    pub fn with_stratification_level(mut self, level: &str) -> Self {
        self.stratification_level_id = level.to_string();
        self
    }

    pub fn with_geo_filters(mut self, geo_type: &str, geo_ids: &str) -> Self {
        self.geo_type_filter = geo_type.to_string();
        self.geo_id_filter = geo_ids.to_string();
        self
    }

    pub fn with_smoothing(mut self, is_smoothed: bool) -> Self {
        self.is_smoothed = is_smoothed;
        self
    }

    pub fn with_query_params(mut self, query_params: Option<String>) -> Self {
        self.query_params = query_params
            .map(|q| q.trim_start_matches('?').to_string())
            .filter(|q| !q.is_empty());
        self
    }

    #[doc = r#"
        Builds the request URL:
        `{base}/getCoreHolder/{measure}/{level}/{geoType}/{geoIds}/{temporal}/{smoothed}/0[?{query}]`

        Identifier segments are percent-encoded. The temporal segment only holds
        digits, commas or a single dash and is sent verbatim.
    "#]
    pub fn to_url(&self, base_url: &str) -> String {
        let mut url: String = format!(
            "{}/getCoreHolder/{}/{}/{}/{}/{}/{}/0",
            base_url.trim_end_matches('/'),
            encode(&self.measure_id),
            encode(&self.stratification_level_id),
            encode(&self.geo_type_filter),
            encode(&self.geo_id_filter),
            self.temporal.to_wire(),
            if self.is_smoothed { 1 } else { 0 },
        );

        if let Some(query) = &self.query_params {
            url.push('?');
            url.push_str(query);
        }

        url
    }
}
