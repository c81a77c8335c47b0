use crate::common::*;

#[doc = "Fill of one geography in a choropleth frame"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct RegionFill {
    geo_id: String,
    value: Option<f64>,
    fill: String,
    tooltip: String,
}
