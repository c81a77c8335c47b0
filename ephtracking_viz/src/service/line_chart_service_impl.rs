use crate::common::*;

use crate::error::chart_error::*;

use crate::enums::chart_kind::*;

use crate::traits::service_traits::{
    chart_image_service::*, chart_service::*, data_fetch_service::*, series_service::*,
};

use crate::model::{
    chart::{chart_data_options::*, disposal_token::*},
    configs::system_config::*,
    series::{series_collection::*, series_options::*},
    temporal::temporal_spec::*,
};

use crate::dto::{chart_outcome::*, fetch_outcome::*, line_plot::*, request_spec::*};

use crate::service::animator::*;

#[doc = r#"
    Continuous year axis from the first to the last year present in the data,
    years without any record included.
"#]
pub fn year_axis(collection: &SeriesCollection) -> Vec<String> {
    let years: Vec<i32> = collection
        .years()
        .iter()
        .filter_map(|y| y.parse::<i32>().ok())
        .collect();

    match (years.iter().min(), years.iter().max()) {
        (Some(start), Some(end)) => (*start..=*end).map(|y| y.to_string()).collect(),
        _ => Vec::new(),
    }
}

#[doc = "Rendered series as image lines aligned with `x_labels`"]
pub fn line_plots(collection: &SeriesCollection, x_labels: &[String]) -> Vec<LinePlot> {
    collection
        .rendered()
        .iter()
        .map(|series| {
            LinePlot::new(
                series.label().to_string(),
                series.color().to_string(),
                x_labels.iter().map(|year| series.value_at(year)).collect(),
            )
        })
        .collect()
}

#[doc = r#"
    Per-frame update of a line chart: every rendered series shows its points up to
    and including `year`. Returns the number of visible, defined points per series.
"#]
pub fn visible_points(collection: &SeriesCollection, year: &str) -> Vec<(String, usize)> {
    collection
        .rendered()
        .iter()
        .map(|series| {
            let cnt: usize = series
                .points_through(year)
                .filter(|(_, point)| point.value().is_some())
                .count();
            (series.label().to_string(), cnt)
        })
        .collect()
}

#[doc = "Animator revealing the lines year by year, `None` for a single-year spec"]
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
    let container: String = container.to_string();

    let on_frame: FrameCallback = Arc::new(move |year: &str| {
        let visible: Vec<(String, usize)> = visible_points(&frame_series, year);
        let total: usize = visible.iter().map(|(_, cnt)| cnt).sum();
        info!(
            "[line-chart:{}] {} -> {} points visible across {} series",
            container,
            year,
            total,
            visible.len()
        );
    });

    Some(Animator::new(years.clone(), on_frame, interval))
}

#[derive(Debug, new)]
pub struct LineChartServiceImpl<F: DataFetchService, S: SeriesService, I: ChartImageService> {
    fetch_service: Arc<F>,
    series_service: S,
    image_service: I,
    system_config: SystemConfig,
}

impl<F, S, I> LineChartServiceImpl<F, S, I>
where
    F: DataFetchService,
    S: SeriesService,
    I: ChartImageService,
{
    fn series_options(&self, data: &ChartDataOptions) -> SeriesOptions {
        let grouping: SeriesGrouping = if *data.stratified() {
            SeriesGrouping::GeographyAndStratification
        } else {
            SeriesGrouping::Geography
        };

        SeriesOptions::new(grouping)
            .with_max_series(*self.system_config.max_series())
            .with_stratification_names(data.stratification_names().clone())
    }

    #[doc = "Initial draw: the static image of every rendered series"]
    async fn export_image(&self, container: &str, title: Option<&str>, collection: &SeriesCollection) {
        let x_labels: Vec<String> = year_axis(collection);
        let lines: Vec<LinePlot> = line_plots(collection, &x_labels);
        let output_path: PathBuf =
            Path::new(self.system_config.output_dir()).join(format!("{}.png", container));

        if let Err(e) = self
            .image_service
            .generate_line_chart(title.unwrap_or(container), x_labels, lines, &output_path)
            .await
        {
            error!(
                "[LineChartServiceImpl->export_image] {} could not be written: {:?}",
                output_path.display(),
                e
            );
        }
    }
}

#[async_trait]
impl<F, S, I> ChartService for LineChartServiceImpl<F, S, I>
where
    F: DataFetchService,
    S: SeriesService,
    I: ChartImageService,
{
    fn kind(&self) -> ChartKind {
        ChartKind::LineChart
    }

    async fn render(
        &self,
        container: &str,
        data: &ChartDataOptions,
        title: Option<&str>,
        token: &DisposalToken,
    ) -> ChartResult<ChartOutcome> {
        let spec: RequestSpec = data.request_spec()?;

        let outcome: FetchOutcome = self.fetch_service.fetch(&spec).await?;

        if !token.is_live() {
            info!("[LineChartServiceImpl->render] {} was discarded, dropping its data", container);
            return Ok(ChartOutcome::Discarded);
        }

        let records = match &outcome {
            FetchOutcome::Records(records) => records,
            FetchOutcome::Empty => {
                warn!("[line-chart:{}] no data", container);
                return Ok(ChartOutcome::NoData);
            }
        };

        let collection: SeriesCollection = self
            .series_service
            .build_series(records, &self.series_options(data))?;

        self.export_image(container, title, &collection).await;

        info!(
            "[line-chart:{}] drew {} series over {}",
            container,
            collection.rendered().len(),
            spec.temporal().to_wire()
        );

        let animator: Option<Animator> = make_animator(
            container,
            spec.temporal(),
            &collection,
            self.system_config.animation_interval(),
        );

        Ok(ChartOutcome::Rendered(RenderedChart::new(
            ChartKind::LineChart,
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
    use crate::model::temporal::temporal_spec::*;
    use crate::service::series_service_impl::*;

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

    #[derive(Default)]
    struct RecordingImage {
        calls: Mutex<Vec<(String, Vec<String>, usize)>>,
    }

    #[async_trait]
    impl ChartImageService for RecordingImage {
        async fn generate_line_chart(
            &self,
            title: &str,
            x_labels: Vec<String>,
            lines: Vec<LinePlot>,
            _output_path: &Path,
        ) -> anyhow::Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((title.to_string(), x_labels, lines.len()));
            Ok(())
        }
    }

    fn record(geo_id: &str, year: &str, value: Option<&str>) -> RawRecord {
        RawRecord::new(
            year.into(),
            geo_id.into(),
            geo_id.into(),
            value.map(str::to_string),
            value.map(str::to_string),
            None,
            Vec::new(),
        )
    }

    fn service(outcome: FetchOutcome) -> LineChartServiceImpl<StaticFetch, SeriesServiceImpl, RecordingImage> {
        LineChartServiceImpl::new(
            Arc::new(StaticFetch(outcome)),
            SeriesServiceImpl::new(),
            RecordingImage::default(),
            SystemConfig::default(),
        )
    }

    fn data(temporal: &str) -> ChartDataOptions {
        ChartDataOptions {
            measure_id: Some("99".into()),
            temporal: Some(TemporalInput::Text(temporal.into())),
            ..Default::default()
        }
    }

    #[test]
    fn year_axis_fills_missing_years() {
        let collection = SeriesServiceImpl::new()
            .build_series(
                &[record("CA", "2000", Some("1")), record("NY", "2003", Some("2"))],
                &SeriesOptions::default(),
            )
            .unwrap();

        assert_eq!(year_axis(&collection), vec!["2000", "2001", "2002", "2003"]);

        let plots = line_plots(&collection, &year_axis(&collection));
        assert_eq!(plots[0].values(), &vec![Some(1.0), None, None, None]);
    }

    #[test]
    fn visible_points_grow_with_year() {
        let collection = SeriesServiceImpl::new()
            .build_series(
                &[
                    record("CA", "2000", Some("1")),
                    record("CA", "2001", None),
                    record("CA", "2002", Some("3")),
                ],
                &SeriesOptions::default(),
            )
            .unwrap();

        assert_eq!(visible_points(&collection, "2000")[0].1, 1);
        assert_eq!(visible_points(&collection, "2001")[0].1, 1);
        assert_eq!(visible_points(&collection, "2002")[0].1, 2);
    }

    #[tokio::test]
    async fn renders_series_image_and_animator() {
        let service = service(FetchOutcome::Records(vec![
            record("CA", "2001", Some("5")),
            record("CA", "2000", Some("3")),
            record("NY", "2000", Some("9")),
        ]));

        let outcome = service
            .render("lines", &data("2000-2001"), Some("Title"), &DisposalToken::new())
            .await
            .unwrap();

        let ChartOutcome::Rendered(chart) = outcome else {
            panic!("expected a rendered chart");
        };
        assert_eq!(chart.series().len(), 2);
        assert!(chart.animator().is_some());

        let calls = service.image_service.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Title");
        assert_eq!(calls[0].1, vec!["2000", "2001"]);
        assert_eq!(calls[0].2, 2);
    }

    #[tokio::test]
    async fn single_year_has_no_animator() {
        let service = service(FetchOutcome::Records(vec![record("CA", "2000", Some("3"))]));
        let outcome = service
            .render("lines", &data("2000"), None, &DisposalToken::new())
            .await
            .unwrap();

        let ChartOutcome::Rendered(chart) = outcome else {
            panic!("expected a rendered chart");
        };
        assert!(chart.animator().is_none());
    }

    #[tokio::test]
    async fn empty_result_and_discarded_chart() {
        let empty = service(FetchOutcome::Empty);
        let outcome = empty
            .render("lines", &data("2000"), None, &DisposalToken::new())
            .await
            .unwrap();
        assert!(matches!(outcome, ChartOutcome::NoData));
        assert!(empty.image_service.calls.lock().unwrap().is_empty());

        let late = service(FetchOutcome::Records(vec![record("CA", "2000", Some("3"))]));
        let token = DisposalToken::new();
        token.dispose();
        let outcome = late.render("lines", &data("2000"), None, &token).await.unwrap();
        assert!(matches!(outcome, ChartOutcome::Discarded));
        assert!(late.image_service.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_temporal_fails_before_fetch() {
        let service = service(FetchOutcome::Empty);
        let err = service
            .render("lines", &data("2005-2000"), None, &DisposalToken::new())
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
