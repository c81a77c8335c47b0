use crate::common::*;

use crate::error::chart_error::*;

use crate::enums::chart_kind::*;

use crate::traits::service_traits::{chart_service::*, data_fetch_service::*, series_service::*};

use crate::model::{
    chart::{chart_data_options::*, disposal_token::*},
    configs::system_config::*,
    series::{series_collection::*, series_options::*},
    temporal::temporal_spec::*,
};

use crate::dto::{chart_outcome::*, fetch_outcome::*, region_fill::*, request_spec::*};

use crate::service::animator::*;

use crate::utils_modules::scale_utils::*;

/* d3 schemeGreens[9] */
pub const GREENS: [&str; 9] = [
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b",
];

pub const MISSING_FILL: &str = "grey";
pub const MISSING_TOOLTIP: &str = "no data";

#[doc = "Map layer drawn for a stratification level, `None` for levels without a map"]
pub fn geography_for_level(level: &str) -> Option<&'static str> {
    match level {
        "1" => Some("states"),
        "2" => Some("counties"),
        _ => None,
    }
}

#[doc = "Nine-class scale from the minimum to the maximum value of the whole collection"]
pub fn fill_scale(collection: &SeriesCollection) -> ThresholdScale {
    let (min, max) = collection.value_range().unwrap_or((0.0, 0.0));
    ThresholdScale::new(min, max, &GREENS)
}

#[doc = r#"
    Fill of every geography for `year`.

    1. A geography with a numeric value takes the color of its class and its
       rollover text (or display value) as tooltip.
    2. A geography without a record or without a value is filled grey with the
       tooltip `no data`.
"#]
pub fn choropleth_frame(collection: &SeriesCollection, year: &str, scale: &ThresholdScale) -> Vec<RegionFill> {
    collection
        .points_at(year)
        .into_iter()
        .map(|(series, point)| {
            let geo_id: String = series.key().geo_id().to_string();

            match point.and_then(|p| (*p.value()).map(|v| (p, v))) {
                Some((point, value)) => {
                    let record = point.record();
                    let tooltip: String = record
                        .rollover_text()
                        .map(str::to_string)
                        .or_else(|| record.display_value().clone())
                        .unwrap_or_else(|| value.to_string());

                    RegionFill::new(geo_id, Some(value), scale.color_of(value).to_string(), tooltip)
                }
                None => RegionFill::new(
                    geo_id,
                    None,
                    MISSING_FILL.to_string(),
                    MISSING_TOOLTIP.to_string(),
                ),
            }
        })
        .collect()
}

fn log_frame(container: &str, year: &str, fills: &[RegionFill]) {
    let filled: usize = fills.iter().filter(|f| f.value().is_some()).count();
    info!(
        "[choropleth:{}] {} -> {} of {} regions filled",
        container,
        year,
        filled,
        fills.len()
    );
}

#[doc = "Animator recoloring the map once per year, `None` for a single-year spec"]
fn make_animator(
    container: &str,
    years: &TemporalSpec,
    collection: &SeriesCollection,
    interval: Duration,
) -> Option<Animator> {
    if years.len() <= 1 {
        return None;
    }

    let frame_series: Arc<SeriesCollection> = Arc::new(collection.clone());
    let scale: ThresholdScale = fill_scale(collection);
    let container: String = container.to_string();

    let on_frame: FrameCallback = Arc::new(move |year: &str| {
        let fills: Vec<RegionFill> = choropleth_frame(&frame_series, year, &scale);
        log_frame(&container, year, &fills);
    });

    Some(Animator::new(years.clone(), on_frame, interval))
}

#[derive(Debug, new)]
pub struct ChoroplethServiceImpl<F: DataFetchService, S: SeriesService> {
    fetch_service: Arc<F>,
    series_service: S,
    system_config: SystemConfig,
}

#[async_trait]
impl<F, S> ChartService for ChoroplethServiceImpl<F, S>
where
    F: DataFetchService,
    S: SeriesService,
{
    fn kind(&self) -> ChartKind {
        ChartKind::Choropleth
    }

    async fn render(
        &self,
        container: &str,
        data: &ChartDataOptions,
        title: Option<&str>,
        token: &DisposalToken,
    ) -> ChartResult<ChartOutcome> {
        let spec: RequestSpec = data.request_spec()?;

        let geography: &str = match geography_for_level(spec.stratification_level_id()) {
            Some(geography) => geography,
            None => {
                warn!(
                    "[choropleth:{}] no map layer for stratification level '{}'",
                    container,
                    spec.stratification_level_id()
                );
                "unknown"
            }
        };

        let outcome: FetchOutcome = self.fetch_service.fetch(&spec).await?;

        if !token.is_live() {
            info!("[ChoroplethServiceImpl->render] {} was discarded, dropping its data", container);
            return Ok(ChartOutcome::Discarded);
        }

        let records = match &outcome {
            FetchOutcome::Records(records) => records,
            FetchOutcome::Empty => {
                warn!("[choropleth:{}] no data", container);
                return Ok(ChartOutcome::NoData);
            }
        };

        let options: SeriesOptions =
            SeriesOptions::new(SeriesGrouping::Geography).with_max_series(usize::MAX);
        let collection: SeriesCollection = self.series_service.build_series(records, &options)?;

        info!(
            "[choropleth:{}] {} map '{}' with {} regions",
            container,
            geography,
            title.unwrap_or(container),
            collection.len()
        );

        let first_year: &str = spec.temporal().first();
        let fills: Vec<RegionFill> = choropleth_frame(&collection, first_year, &fill_scale(&collection));
        log_frame(container, first_year, &fills);

        let animator: Option<Animator> = make_animator(
            container,
            spec.temporal(),
            &collection,
            self.system_config.animation_interval(),
        );

        Ok(ChartOutcome::Rendered(RenderedChart::new(
            ChartKind::Choropleth,
            container.to_string(),
            collection,
            None,
            animator,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::record::raw_record::*;
    use crate::service::series_service_impl::*;

    fn record(geo_id: &str, year: &str, value: Option<&str>, rollover: &str) -> RawRecord {
        RawRecord::new(
            year.into(),
            geo_id.into(),
            geo_id.into(),
            value.map(str::to_string),
            value.map(str::to_string),
            None,
            vec![rollover.to_string()],
        )
    }

    fn collection(records: &[RawRecord]) -> SeriesCollection {
        SeriesServiceImpl::new()
            .build_series(
                records,
                &SeriesOptions::new(SeriesGrouping::Geography).with_max_series(usize::MAX),
            )
            .unwrap()
    }

    struct StaticFetch(FetchOutcome);

    #[async_trait]
    impl DataFetchService for StaticFetch {
        async fn fetch(&self, _spec: &RequestSpec) -> ChartResult<FetchOutcome> {
            Ok(self.0.clone())
        }

        async fn fetch_all(&self, specs: &[RequestSpec]) -> ChartResult<Vec<FetchOutcome>> {
            Ok(specs.iter().map(|_| self.0.clone()).collect())
        }
    }

    #[test]
    fn levels_map_to_layers() {
        assert_eq!(geography_for_level("1"), Some("states"));
        assert_eq!(geography_for_level("2"), Some("counties"));
        assert_eq!(geography_for_level("3"), None);
    }

    #[test]
    fn frame_colors_by_class_and_greys_missing() {
        let collection = collection(&[
            record("01", "2000", Some("0"), "Alabama: 0"),
            record("02", "2000", Some("90"), "Alaska: 90"),
            record("04", "2000", None, "Arizona"),
            record("05", "2001", Some("45"), "Arkansas: 45"),
        ]);
        let scale = fill_scale(&collection);

        let fills = choropleth_frame(&collection, "2000", &scale);
        assert_eq!(fills.len(), 4);

        assert_eq!(fills[0].fill(), GREENS[0]);
        assert_eq!(fills[0].tooltip(), "Alabama: 0");
        assert_eq!(fills[1].fill(), GREENS[8]);

        assert_eq!(fills[2].fill(), MISSING_FILL);
        assert_eq!(fills[2].tooltip(), MISSING_TOOLTIP);

        /* no record for 2000 at all */
        assert_eq!(fills[3].fill(), MISSING_FILL);
        assert_eq!(fills[3].value(), &None);
    }

    #[test]
    fn every_region_is_kept_beyond_the_line_cap() {
        let records: Vec<RawRecord> = (0..15)
            .map(|i| record(&format!("{:02}", i), "2000", Some("1"), "r"))
            .collect();
        let collection = collection(&records);
        assert_eq!(collection.rendered().len(), 15);
    }

    #[tokio::test]
    async fn renders_with_animator_for_multi_year() {
        let service = ChoroplethServiceImpl::new(
            Arc::new(StaticFetch(FetchOutcome::Records(vec![
                record("01", "2000", Some("1"), "a"),
                record("01", "2001", Some("2"), "b"),
            ]))),
            SeriesServiceImpl::new(),
            SystemConfig::default(),
        );

        let data = ChartDataOptions {
            measure_id: Some("99".into()),
            temporal: Some(TemporalInput::Text("2000-2001".into())),
            ..Default::default()
        };

        let outcome = service
            .render("map", &data, None, &DisposalToken::new())
            .await
            .unwrap();
        let ChartOutcome::Rendered(chart) = outcome else {
            panic!("expected a rendered chart");
        };
        assert_eq!(chart.kind(), &ChartKind::Choropleth);
        assert!(chart.animator().is_some());
    }

    #[tokio::test]
    async fn missing_measure_is_rejected() {
        let service = ChoroplethServiceImpl::new(
            Arc::new(StaticFetch(FetchOutcome::Empty)),
            SeriesServiceImpl::new(),
            SystemConfig::default(),
        );

        let err = service
            .render("map", &ChartDataOptions::default(), None, &DisposalToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ChartError::MissingOption("measure_id")));
    }
}
