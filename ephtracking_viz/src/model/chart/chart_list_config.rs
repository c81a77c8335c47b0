use crate::common::*;

use crate::model::chart::chart_data_options::*;

#[doc = "One render request: chart kind discriminator, output container, optional title"]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ChartRequestConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub container: String,
    pub title: Option<String>,
    #[serde(default)]
    pub data: ChartDataOptions,
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartListConfig {
    #[serde(default)]
    pub chart: Vec<ChartRequestConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_list() {
        let list: ChartListConfig = toml::from_str(
            r#"
            [[chart]]
            type = "line-chart"
            container = "asthma_lines"
            title = "Asthma ED visits"
            [chart.data]
            measure_id = "99"
            temporal = "2005-2010"
            stratified = true
            stratification_names = { "1" = "Female", "2" = "Male" }

            [[chart]]
            type = "bubble"
            container = "ozone_vs_pm"
            [chart.data]
            temporal = ["2010", "2011"]
            x = { measure_id = "296" }
            y = { measure_id = "297", is_smoothed = true }
            population = { "California" = 39000000.0 }
            "#,
        )
        .unwrap();

        assert_eq!(list.chart().len(), 2);
        assert_eq!(list.chart()[0].chart_type(), "line-chart");
        assert!(list.chart()[0].data().stratified);
        assert_eq!(
            list.chart()[0].data().stratification_names.get("2").map(String::as_str),
            Some("Male")
        );
        assert_eq!(list.chart()[1].title(), &None);
        assert!(list.chart()[1].data().y.as_ref().unwrap().is_smoothed);
    }
}
