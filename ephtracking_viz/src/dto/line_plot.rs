use crate::common::*;

#[doc = "One line of a static line chart image, `values` aligned with the x labels"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct LinePlot {
    label: String,
    color: String,
    values: Vec<Option<f64>>,
}
