use crate::common::*;

#[doc = "One bubble of a bubble chart frame: a geography with both measures defined"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct BubblePoint {
    geo_id: String,
    geo: String,
    year: String,
    x: f64,
    y: f64,
    population: Option<f64>,
    radius: f64,
    fill: String,
    stroke: String,
    tooltip: String,
}
