use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::error::chart_error::*;

use crate::enums::chart_kind::*;

use crate::model::{
    chart::{chart_list_config::*, disposal_token::*},
    configs::{system_config::*, total_config::*},
};

use crate::dto::chart_outcome::*;

use crate::env_configuration::env_config::*;

use crate::traits::service_traits::chart_service::*;

#[derive(Debug)]
pub struct MainController<L: ChartService, C: ChartService, B: ChartService> {
    line_chart_service: L,
    choropleth_service: C,
    bubble_service: B,
    system_config: SystemConfig,
    /* container -> token of its latest render */
    live_charts: Mutex<HashMap<String, DisposalToken>>,
}

impl<L: ChartService, C: ChartService, B: ChartService> MainController<L, C, B> {
    pub fn new(line_chart_service: L, choropleth_service: C, bubble_service: B) -> Self {
        Self::with_system_config(
            line_chart_service,
            choropleth_service,
            bubble_service,
            get_system_config_info().clone(),
        )
    }

    pub fn with_system_config(
        line_chart_service: L,
        choropleth_service: C,
        bubble_service: B,
        system_config: SystemConfig,
    ) -> Self {
        MainController {
            line_chart_service,
            choropleth_service,
            bubble_service,
            system_config,
            live_charts: Mutex::new(HashMap::new()),
        }
    }

    #[doc = r#"
        Entry point: renders every chart of the chart list (`CHART_LIST_PATH`).

        1. Reads the `[[chart]]` requests from the chart list file
        2. Runs every request concurrently, each one independent of the others
        3. A failing chart is logged and never stops the remaining ones

        # Returns
        * `anyhow::Result<()>` - Err only when the chart list cannot be read
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let chart_list: ChartListConfig = read_toml_from_file::<ChartListConfig>(&CHART_LIST_PATH)
            .context("[MainController->main_task] failed to read the chart list")?;

        info!("{} chart request(s) loaded", chart_list.chart().len());

        self.run_charts(chart_list.chart()).await;

        Ok(())
    }

    #[doc = "Runs a batch of chart requests concurrently, logging each failure"]
    pub async fn run_charts(&self, requests: &[ChartRequestConfig]) {
        let results: Vec<anyhow::Result<()>> =
            join_all(requests.iter().map(|request| self.run_chart(request))).await;

        for (request, result) in requests.iter().zip(results) {
            if let Err(e) = result {
                error!(
                    "[MainController->run_charts] chart '{}' ({}) failed: {:?}",
                    request.container(),
                    request.chart_type(),
                    e
                );
            }
        }
    }

    #[doc = r#"
        Renders one chart and plays its animation to the end.

        1. `dispatch_tracked` picks the renderer and draws the chart
        2. A multi-year chart is animated, then replayed `system.replay_count` times
        3. The container is released once the chart has finished
    "#]
    async fn run_chart(&self, request: &ChartRequestConfig) -> anyhow::Result<()> {
        let Some((outcome, token)) = self.dispatch_tracked(request).await? else {
            return Ok(());
        };

        self.play(request, outcome).await;
        self.release(request.container(), &token);

        Ok(())
    }

    async fn play(&self, request: &ChartRequestConfig, outcome: ChartOutcome) {
        let mut chart: RenderedChart = match outcome {
            ChartOutcome::Rendered(chart) => chart,
            ChartOutcome::NoData => {
                info!("[{}] drew the 'no data' placeholder", request.container());
                return;
            }
            ChartOutcome::Discarded => return,
        };

        let replay_count: usize = *self.system_config.replay_count();

        if let Some(animator) = chart.animator_mut() {
            animator.start();
            animator.wait().await;

            for _ in 0..replay_count {
                if !animator.can_replay() {
                    break;
                }
                animator.replay();
                animator.wait().await;
            }
        }

        info!(
            "[{}] {} finished with {} series",
            request.container(),
            chart.kind(),
            chart.series().len()
        );
    }

    #[doc = r#"
        Hands a request to the renderer of its `type`.

        1. An unknown discriminator is logged and nothing is rendered
        2. A render of a container replaces an earlier one still in flight:
           the earlier token is disposed so its data is dropped on arrival

        # Returns
        * `Option<ChartOutcome>` - `None` when the request named no known chart kind
    "#]
    pub async fn dispatch(&self, request: &ChartRequestConfig) -> anyhow::Result<Option<ChartOutcome>> {
        let tracked: Option<(ChartOutcome, DisposalToken)> = self.dispatch_tracked(request).await?;

        Ok(tracked.map(|(outcome, token)| {
            self.release(request.container(), &token);
            outcome
        }))
    }

    #[doc = "`dispatch` keeping the container registered until the caller releases its token"]
    async fn dispatch_tracked(
        &self,
        request: &ChartRequestConfig,
    ) -> anyhow::Result<Option<(ChartOutcome, DisposalToken)>> {
        let kind: ChartKind = match request.chart_type().parse::<ChartKind>() {
            Ok(kind) => kind,
            Err(e) => {
                error!("[MainController->dispatch] {} (container '{}')", e, request.container());
                return Ok(None);
            }
        };

        let token: DisposalToken = self.register(request.container());
        let container: &str = request.container();
        let title: Option<&str> = request.title().as_deref();

        let rendered: ChartResult<ChartOutcome> = match kind {
            ChartKind::LineChart => {
                self.line_chart_service
                    .render(container, request.data(), title, &token)
                    .await
            }
            ChartKind::Choropleth => {
                self.choropleth_service
                    .render(container, request.data(), title, &token)
                    .await
            }
            ChartKind::Bubble => {
                self.bubble_service
                    .render(container, request.data(), title, &token)
                    .await
            }
        };

        match rendered {
            Ok(outcome) => Ok(Some((outcome, token))),
            Err(e) => {
                self.release(container, &token);
                Err(e).with_context(|| format!("[MainController->dispatch] {} '{}'", kind, container))
            }
        }
    }

    fn live_charts(&self) -> MutexGuard<'_, HashMap<String, DisposalToken>> {
        match self.live_charts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[doc = "Issues a fresh token for `container`, disposing the one of its previous render"]
    fn register(&self, container: &str) -> DisposalToken {
        let token: DisposalToken = DisposalToken::new();

        if let Some(previous) = self.live_charts().insert(container.to_string(), token.clone()) {
            previous.dispose();
        }

        token
    }

    #[doc = "Forgets `container` unless a newer render has taken it over"]
    fn release(&self, container: &str, token: &DisposalToken) {
        let mut live_charts = self.live_charts();

        if live_charts
            .get(container)
            .is_some_and(|current| current.same_as(token))
        {
            live_charts.remove(container);
        }
    }
}
