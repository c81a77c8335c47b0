use crate::common::*;

use crate::error::chart_error::*;

use crate::enums::chart_kind::*;

use crate::traits::service_traits::{chart_service::*, data_fetch_service::*, series_service::*};

use crate::model::{
    chart::{chart_data_options::*, disposal_token::*},
    configs::system_config::*,
    record::raw_record::*,
    series::{series::*, series_collection::*, series_options::*},
    temporal::temporal_spec::*,
};

use crate::dto::{bubble_point::*, chart_outcome::*, fetch_outcome::*, request_spec::*};

use crate::service::animator::*;

use crate::utils_modules::scale_utils::*;

pub const MIN_RADIUS: f64 = 5.0;
pub const MAX_RADIUS: f64 = 30.0;

pub const UNKNOWN_REGION_COLOR: &str = "#808080";

/* census regions: (name, fill, stroke) */
const REGION_COLORS: [(&str, &str, &str); 4] = [
    ("Northeast", "#324D5C", "#7EC2E8"),
    ("Midwest", "#46B29D", "#2D7265"),
    ("South", "#F0CA4D", "#B09439"),
    ("West", "#DE5349", "#9E3B34"),
];

#[doc = "Fill and stroke of a census region, grey for regions outside the lookup"]
pub fn region_colors(region: Option<&str>) -> (&'static str, &'static str) {
    region
        .and_then(|name| REGION_COLORS.iter().find(|(region, _, _)| *region == name))
        .map(|(_, fill, stroke)| (*fill, *stroke))
        .unwrap_or((UNKNOWN_REGION_COLOR, UNKNOWN_REGION_COLOR))
}

#[doc = "Linear radius scale over the population lookup, from 5 to 30"]
pub fn radius_scale(population: &HashMap<String, f64>) -> LinearScale {
    let (min, max) = population
        .values()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0));

    LinearScale::new((min, max), (MIN_RADIUS, MAX_RADIUS))
}

/* lookups are keyed by geography name, the id is accepted as well */
fn lookup<'a, T>(map: &'a HashMap<String, T>, record: &RawRecord) -> Option<&'a T> {
    map.get(record.geo()).or_else(|| map.get(record.geo_id()))
}

fn rollover_or_value(record: &RawRecord) -> &str {
    record
        .rollover_text()
        .or(record.display_value().as_deref())
        .unwrap_or("no data")
}

#[doc = "Static lookups and scales shared by every frame of one bubble chart"]
#[derive(Debug, Clone, new)]
pub struct BubbleContext {
    population: HashMap<String, f64>,
    regions: HashMap<String, String>,
    radius: LinearScale,
}

impl BubbleContext {
    pub fn from_options(data: &ChartDataOptions) -> Self {
        BubbleContext::new(
            data.population().clone(),
            data.regions().clone(),
            radius_scale(data.population()),
        )
    }
}

#[doc = r#"
    Bubbles of one frame.

    1. Walks the `x` series in order and pairs each with the `y` series of the same
       geography.
    2. A geography yields a bubble only when both measures have a value for `year`.
    3. Radius comes from the population lookup (minimum radius without an entry),
       colors from the region lookup.
"#]
pub fn pair_bubbles(
    x: &SeriesCollection,
    y: &SeriesCollection,
    year: &str,
    ctx: &BubbleContext,
) -> Vec<BubblePoint> {
    x.rendered()
        .iter()
        .filter_map(|x_series| {
            let y_series: &Series = y.find(x_series.key())?;

            let x_point = x_series.point(year)?;
            let y_point = y_series.point(year)?;

            let x_value: f64 = (*x_point.value())?;
            let y_value: f64 = (*y_point.value())?;

            let record: &RawRecord = x_point.record();
            let population: Option<f64> = lookup(&ctx.population, record).copied();
            let radius: f64 = population.map_or(MIN_RADIUS, |p| ctx.radius.apply(p));

            let (fill, stroke) = region_colors(lookup(&ctx.regions, record).map(String::as_str));

            let tooltip: String = format!(
                "{}:\nx: {}\ny: {}",
                record.geo(),
                rollover_or_value(record),
                rollover_or_value(y_point.record())
            );

            Some(BubblePoint::new(
                record.geo_id().to_string(),
                record.geo().to_string(),
                year.to_string(),
                x_value,
                y_value,
                population,
                radius,
                fill.to_string(),
                stroke.to_string(),
                tooltip,
            ))
        })
        .collect()
}

fn log_frame(container: &str, year: &str, bubbles: &[BubblePoint]) {
    info!(
        "[bubble:{}] {} -> {} bubbles",
        container,
        year,
        bubbles.len()
    );
}

#[doc = "Animator moving the bubbles once per year, `None` for a single-year spec"]
fn make_animator(
    container: &str,
    years: &TemporalSpec,
    x: &SeriesCollection,
    y: &SeriesCollection,
    ctx: BubbleContext,
    interval: Duration,
) -> Option<Animator> {
    if years.len() <= 1 {
        return None;
    }

    let x: Arc<SeriesCollection> = Arc::new(x.clone());
    let y: Arc<SeriesCollection> = Arc::new(y.clone());
    let container: String = container.to_string();

    let on_frame: FrameCallback = Arc::new(move |year: &str| {
        let bubbles: Vec<BubblePoint> = pair_bubbles(&x, &y, year, &ctx);
        log_frame(&container, year, &bubbles);
    });

    Some(Animator::new(years.clone(), on_frame, interval))
}

#[derive(Debug, new)]
pub struct BubbleServiceImpl<F: DataFetchService, S: SeriesService> {
    fetch_service: Arc<F>,
    series_service: S,
    system_config: SystemConfig,
}

#[async_trait]
impl<F, S> ChartService for BubbleServiceImpl<F, S>
where
    F: DataFetchService,
    S: SeriesService,
{
    fn kind(&self) -> ChartKind {
        ChartKind::Bubble
    }

    async fn render(
        &self,
        container: &str,
        data: &ChartDataOptions,
        title: Option<&str>,
        token: &DisposalToken,
    ) -> ChartResult<ChartOutcome> {
        let specs: Vec<RequestSpec> = vec![
            data.axis_request_spec(data.x(), "x.measure_id")?,
            data.axis_request_spec(data.y(), "y.measure_id")?,
        ];

        /* both measures or neither */
        let outcomes: Vec<FetchOutcome> = self.fetch_service.fetch_all(&specs).await?;

        if !token.is_live() {
            info!("[BubbleServiceImpl->render] {} was discarded, dropping its data", container);
            return Ok(ChartOutcome::Discarded);
        }

        let (x_records, y_records) = match (outcomes.first(), outcomes.get(1)) {
            (Some(FetchOutcome::Records(x)), Some(FetchOutcome::Records(y))) => (x, y),
            _ => {
                warn!("[bubble:{}] no data", container);
                return Ok(ChartOutcome::NoData);
            }
        };

        let options: SeriesOptions =
            SeriesOptions::new(SeriesGrouping::Geography).with_max_series(usize::MAX);
        let x: SeriesCollection = self.series_service.build_series(x_records, &options)?;
        let y: SeriesCollection = self.series_service.build_series(y_records, &options)?;

        let ctx: BubbleContext = BubbleContext::from_options(data);
        let temporal: &TemporalSpec = specs[0].temporal();

        let bubbles: Vec<BubblePoint> = pair_bubbles(&x, &y, temporal.first(), &ctx);
        info!(
            "[bubble:{}] '{}' pairs {} x series with {} y series",
            container,
            title.unwrap_or(container),
            x.len(),
            y.len()
        );
        log_frame(container, temporal.first(), &bubbles);

        let animator: Option<Animator> = make_animator(
            container,
            temporal,
            &x,
            &y,
            ctx,
            self.system_config.animation_interval(),
        );

        Ok(ChartOutcome::Rendered(RenderedChart::new(
            ChartKind::Bubble,
            container.to_string(),
            x,
            Some(y),
            animator,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::temporal::temporal_spec::*;
    use crate::service::series_service_impl::*;

    fn record(geo: &str, year: &str, value: Option<&str>, rollover: &str) -> RawRecord {
        RawRecord::new(
            year.into(),
            format!("id-{}", geo),
            geo.into(),
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

    /* answers by measure id, a missing id is an empty result */
    struct MeasureFetch(HashMap<String, Vec<RawRecord>>);

    #[async_trait]
    impl DataFetchService for MeasureFetch {
        async fn fetch(&self, spec: &RequestSpec) -> ChartResult<FetchOutcome> {
            Ok(FetchOutcome::from_records(
                self.0.get(spec.measure_id()).cloned().unwrap_or_default(),
            ))
        }

        async fn fetch_all(&self, specs: &[RequestSpec]) -> ChartResult<Vec<FetchOutcome>> {
            let mut outcomes: Vec<FetchOutcome> = Vec::new();
            for spec in specs {
                outcomes.push(self.fetch(spec).await?);
            }
            Ok(outcomes)
        }
    }

    fn bubble_data(x: &str, y: &str, temporal: &str) -> ChartDataOptions {
        ChartDataOptions {
            temporal: Some(TemporalInput::Text(temporal.into())),
            x: Some(MeasureOptions {
                measure_id: Some(x.into()),
                is_smoothed: false,
            }),
            y: Some(MeasureOptions {
                measure_id: Some(y.into()),
                is_smoothed: false,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn regions_pick_fill_and_stroke() {
        assert_eq!(region_colors(Some("South")), ("#F0CA4D", "#B09439"));
        assert_eq!(region_colors(Some("Atlantis")), (UNKNOWN_REGION_COLOR, UNKNOWN_REGION_COLOR));
        assert_eq!(region_colors(None), (UNKNOWN_REGION_COLOR, UNKNOWN_REGION_COLOR));
    }

    #[test]
    fn bubbles_pair_by_geography_and_need_both_values() {
        let x = collection(&[
            record("Texas", "2000", Some("10"), "TX x"),
            record("Ohio", "2000", Some("20"), "OH x"),
            record("Utah", "2000", Some("30"), "UT x"),
        ]);
        let y = collection(&[
            record("Ohio", "2000", Some("2"), "OH y"),
            record("Texas", "2000", Some("1"), "TX y"),
            record("Utah", "2000", None, "UT y"),
        ]);

        let population: HashMap<String, f64> =
            HashMap::from([("Texas".to_string(), 100.0), ("Ohio".to_string(), 50.0)]);
        let regions: HashMap<String, String> =
            HashMap::from([("Texas".to_string(), "South".to_string())]);
        let ctx = BubbleContext::new(population.clone(), regions, radius_scale(&population));

        let bubbles = pair_bubbles(&x, &y, "2000", &ctx);
        assert_eq!(bubbles.len(), 2);

        let texas = &bubbles[0];
        assert_eq!(texas.geo(), "Texas");
        assert_eq!((*texas.x(), *texas.y()), (10.0, 1.0));
        assert_eq!(*texas.radius(), MAX_RADIUS);
        assert_eq!(texas.fill(), "#F0CA4D");
        assert_eq!(texas.tooltip(), "Texas:\nx: TX x\ny: TX y");

        let ohio = &bubbles[1];
        assert_eq!(*ohio.radius(), MIN_RADIUS);
        assert_eq!(ohio.fill(), UNKNOWN_REGION_COLOR);
    }

    #[test]
    fn missing_population_gets_minimum_radius() {
        let x = collection(&[record("Iowa", "2000", Some("1"), "x")]);
        let y = collection(&[record("Iowa", "2000", Some("2"), "y")]);
        let ctx = BubbleContext::new(HashMap::new(), HashMap::new(), radius_scale(&HashMap::new()));

        let bubbles = pair_bubbles(&x, &y, "2000", &ctx);
        assert_eq!(*bubbles[0].radius(), MIN_RADIUS);
        assert_eq!(bubbles[0].population(), &None);
    }

    #[tokio::test]
    async fn renders_paired_series() {
        let service = BubbleServiceImpl::new(
            Arc::new(MeasureFetch(HashMap::from([
                ("1".to_string(), vec![record("Iowa", "2000", Some("1"), "x")]),
                ("2".to_string(), vec![record("Iowa", "2000", Some("2"), "y")]),
            ]))),
            SeriesServiceImpl::new(),
            SystemConfig::default(),
        );

        let outcome = service
            .render("bubbles", &bubble_data("1", "2", "2000-2002"), None, &DisposalToken::new())
            .await
            .unwrap();

        let ChartOutcome::Rendered(chart) = outcome else {
            panic!("expected a rendered chart");
        };
        assert_eq!(chart.kind(), &ChartKind::Bubble);
        assert!(chart.paired_series().is_some());
        assert!(chart.animator().is_some());
    }

    #[tokio::test]
    async fn one_empty_measure_means_no_data() {
        let service = BubbleServiceImpl::new(
            Arc::new(MeasureFetch(HashMap::from([(
                "1".to_string(),
                vec![record("Iowa", "2000", Some("1"), "x")],
            )]))),
            SeriesServiceImpl::new(),
            SystemConfig::default(),
        );

        let outcome = service
            .render("bubbles", &bubble_data("1", "2", "2000"), None, &DisposalToken::new())
            .await
            .unwrap();
        assert!(matches!(outcome, ChartOutcome::NoData));
    }

    #[tokio::test]
    async fn missing_axis_measure_is_rejected() {
        let service = BubbleServiceImpl::new(
            Arc::new(MeasureFetch(HashMap::new())),
            SeriesServiceImpl::new(),
            SystemConfig::default(),
        );

        let mut data = bubble_data("1", "2", "2000");
        data.y = None;

        let err = service
            .render("bubbles", &data, None, &DisposalToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ChartError::MissingOption("y.measure_id")));
    }
}
